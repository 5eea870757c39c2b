//! One-shot listings for the command line.

use crate::dto::stats::StatCard;
use crate::filters::RecordFilter;
use crate::services::ServiceResult;
use crate::services::screen::ListScreen;
use crate::source::endpoints::Listing;
use crate::source::http::ConsoleClient;
use crate::views::ListView;
use crate::views::html::HtmlTableView;
use crate::views::row::TableRow;
use crate::views::text::TextTableView;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

/// Rendered page plus the stats cards shown above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOutput {
    pub body: String,
    pub stats: Vec<StatCard>,
}

/// What a listing needs from the console request.
#[derive(Debug, Clone, Copy)]
pub struct ListingRequest {
    pub page: usize,
    pub page_size: usize,
    pub format: OutputFormat,
}

/// Loads every `T`, applies `filter`, moves to the requested page and
/// renders it.
pub async fn show_listing<T, F>(
    client: &ConsoleClient,
    filter: F,
    request: ListingRequest,
) -> ServiceResult<ListingOutput>
where
    T: Listing + TableRow,
    F: RecordFilter<T> + 'static,
{
    match request.format {
        OutputFormat::Text => {
            let screen = load_screen(client, TextTableView::new::<T>(), filter, request).await?;
            let view = screen.controller().view();

            let mut body = String::new();
            for message in view.messages() {
                body.push_str(message);
                body.push('\n');
            }
            body.push_str(&view.to_text());

            Ok(ListingOutput {
                body,
                stats: screen.stat_cards(),
            })
        }
        OutputFormat::Html => {
            let screen = load_screen(client, HtmlTableView::new::<T>()?, filter, request).await?;
            let view = screen.controller().view();

            let body = format!("{}{}", view.render_alerts()?, view.render_table()?);
            Ok(ListingOutput {
                body,
                stats: screen.stat_cards(),
            })
        }
    }
}

async fn load_screen<T, V, F>(
    client: &ConsoleClient,
    view: V,
    filter: F,
    request: ListingRequest,
) -> ServiceResult<ListScreen<T, V>>
where
    T: Listing,
    V: ListView<T>,
    F: RecordFilter<T> + 'static,
{
    let mut screen = ListScreen::open(client, view, request.page_size);
    screen.refresh().await?;

    let controller = screen.controller_mut();
    controller.apply_filter(filter);
    if request.page > 1 {
        controller.go_to_page(request.page);
    }

    Ok(screen)
}

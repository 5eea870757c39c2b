use serde::Deserialize;
use validator::Validate;

use crate::domain::payment::{Payment, PaymentStatus};
use crate::filters::{
    FilterError, MAX_SEARCH_LEN, RecordFilter, contains_ignore_case, non_empty, normalize_search,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw inputs of the payments filter bar.
pub struct PaymentFilterForm {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub method: String,
    /// Matches the transaction id or booking reference.
    #[serde(default)]
    #[validate(length(max = MAX_SEARCH_LEN))]
    pub search: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentFilter {
    pub status: Option<PaymentStatus>,
    pub method: Option<String>,
    pub search: Option<String>,
}

impl TryFrom<PaymentFilterForm> for PaymentFilter {
    type Error = FilterError;

    fn try_from(form: PaymentFilterForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            status: non_empty(&form.status).map(PaymentStatus::from),
            method: non_empty(&form.method).map(str::to_string),
            search: normalize_search(&form.search),
        })
    }
}

impl RecordFilter<Payment> for PaymentFilter {
    fn matches(&self, payment: &Payment) -> bool {
        let status = self
            .status
            .as_ref()
            .is_none_or(|s| s.as_str().eq_ignore_ascii_case(payment.status.as_str()));
        let method = self
            .method
            .as_deref()
            .is_none_or(|m| m.eq_ignore_ascii_case(&payment.payment_method));
        let search = self.search.as_deref().is_none_or(|term| {
            payment
                .transaction_id
                .as_deref()
                .is_some_and(|txn| contains_ignore_case(txn, term))
                || contains_ignore_case(&payment.booking_reference, term)
        });

        status && method && search
    }
}

//! Mock record sources for isolating controllers and screens in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::booking::Booking;
use crate::domain::staff::StaffMember;
use crate::source::RecordSource;
use crate::source::errors::SourceResult;

mock! {
    pub BookingSource {}

    #[async_trait]
    impl RecordSource<Booking> for BookingSource {
        async fn fetch_records(&self) -> SourceResult<Vec<Booking>>;
    }
}

mock! {
    pub StaffSource {}

    #[async_trait]
    impl RecordSource<StaffMember> for StaffSource {
        async fn fetch_records(&self) -> SourceResult<Vec<StaffMember>>;
    }
}

use async_trait::async_trait;
use barbershop_core::{availability::AppointmentQuery, models::appointment::Appointment};
use mockall::mock;
use uuid::Uuid;

// Mock appointment source for handler tests
mock! {
    pub AppointmentQuery {}

    #[async_trait]
    impl AppointmentQuery for AppointmentQuery {
        async fn find_by_provider_and_day(
            &self,
            provider_id: Uuid,
            year: i32,
            month: u32,
            day: u32,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn find_by_provider_and_month(
            &self,
            provider_id: Uuid,
            year: i32,
            month: u32,
        ) -> eyre::Result<Vec<Appointment>>;
    }
}

use availability_core::models::Schedule;
use mockall::mock;

use crate::store::ScheduleObserver;

// Mock observer for testing
mock! {
    pub Observer {}

    impl ScheduleObserver for Observer {
        fn on_schedule_update(&mut self, schedule: &Schedule);
    }
}

// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests and the report binary import modules from this crate root.

pub mod core {
    pub mod minutes;
    pub mod schedule;
}

pub mod application {
    pub mod scheduled {
        pub mod for_teams;
        pub mod over_range;
    }
    pub mod adherence {
        pub mod calculate;
        pub mod day_status;
    }
    pub mod worked {
        pub mod by_day;
    }
    pub mod report {
        pub mod build;
        pub mod model;
    }
}

pub mod adapters {
    pub mod json_file {
        pub mod report_input;
    }
}

pub mod shell;

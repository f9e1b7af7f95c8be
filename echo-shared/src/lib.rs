pub mod models {
    pub mod errors;
    pub mod payload;
}

pub mod utilities {
    pub mod config;
    pub mod logging;
    pub mod requests;
    pub mod responses;
    pub mod test;
}

pub mod router;

pub mod endpoints {
    pub mod metadata;
}

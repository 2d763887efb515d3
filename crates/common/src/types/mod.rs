use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Static greeting returned by the root route.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

pub const WELCOME_MESSAGE: &str = "Welcome! The website is under construction.";

pub mod contact_router;
pub mod quote_router;

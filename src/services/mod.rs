pub mod ltp_service;

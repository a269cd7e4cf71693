pub mod phone_service;

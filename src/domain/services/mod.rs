//! Domain Services
//!
//! Business logic services that operate on domain entities through ports.

mod qna_service;

pub use qna_service::QnaService;

pub mod composition;

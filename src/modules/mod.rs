pub mod genre;

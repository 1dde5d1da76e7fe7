pub mod inquiry;

pub mod mandart;

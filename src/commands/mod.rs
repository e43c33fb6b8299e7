pub mod cd;
pub mod echo;
pub mod exit;
pub mod history;
pub mod ls;
pub mod tac;
pub mod touch;

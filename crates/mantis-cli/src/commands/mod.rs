pub mod chain;
pub mod children;
pub mod dispatch;
pub mod mutate;
pub mod path;
pub mod tree;

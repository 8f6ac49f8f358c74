mod load_dotenv;
mod naming;

pub use load_dotenv::load_dotenv;
pub use naming::to_c_variable;

pub mod settings;

mod auth_layout;
pub use auth_layout::AuthLayout;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

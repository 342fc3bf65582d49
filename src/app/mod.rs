//! Front-end controllers: navigation, route guarding, login flow and notices.

pub mod guard;
pub mod login;
pub mod navigation;
pub mod notify;

pub use guard::RouteGuard;
pub use login::{LoginController, LoginView};
pub use navigation::{HistoryNavigator, Navigator, Route};
pub use notify::{Notice, NoticeLevel};

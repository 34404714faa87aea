pub(crate) mod about_page;
pub(crate) mod home_page;

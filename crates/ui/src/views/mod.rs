mod about;
mod components;
mod contact;
mod footer;
mod hero;
mod landing;
mod nav;
mod packages;
mod process;
mod quiz;
mod scripts;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use landing::LandingView;
pub use state::ViewError;

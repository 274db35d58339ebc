mod media;
mod reviews;

pub use media::AdminMediaPage;
pub use reviews::AdminReviewsPage;

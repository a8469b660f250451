//! Page sections, top to bottom.

mod about;
pub use about::AboutSection;

mod features;
pub use features::Features;

mod footer;
pub use footer::Footer;

mod hero;
pub use hero::Hero;

mod landing;
pub use landing::Landing;

mod newsletter;
pub use newsletter::NewsletterCta;

mod products;
pub use products::ProductsSection;

use serde::{Deserialize, Serialize};

/// Local business from the Yelp search
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Business {
    pub name: String,
    pub url: String,
    pub image_url: String,
    pub rating: f64,
    /// Price tier such as `"$$"`, absent for some listings
    pub price: Option<String>,
}

//! Test data helpers for creating request objects

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use lightbnb::models::{CreatePropertyRequest, CreateUserRequest};

/// A user registration with generated name and email
pub fn fake_user_request() -> CreateUserRequest {
    CreateUserRequest {
        name: Name().fake(),
        email: SafeEmail().fake(),
        password: "password".to_string(),
    }
}

pub fn create_property_request(owner_id: i32, city: &str, cost_per_night: i32) -> CreatePropertyRequest {
    CreatePropertyRequest {
        owner_id,
        title: format!("Listing in {}", city),
        description: "description".to_string(),
        thumbnail_photo_url: "https://example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://example.com/cover.jpg".to_string(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "100 Test Ave".to_string(),
        city: city.to_string(),
        province: "BC".to_string(),
        post_code: "V5K 0A1".to_string(),
    }
}

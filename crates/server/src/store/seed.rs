//! The fixed catalog seeded on first run.

use tatvaani_core::{Product, ProductId};

fn product(
    name: &str,
    category: &str,
    price: f64,
    original_price: f64,
    description: &str,
    image: &str,
    images: [&str; 2],
    artisan: &str,
    origin: &str,
    featured: bool,
    rating: f64,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::random(),
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        original_price: Some(original_price),
        description: description.to_owned(),
        image: image.to_owned(),
        images: images.iter().map(|s| (*s).to_owned()).collect(),
        artisan: artisan.to_owned(),
        origin: origin.to_owned(),
        in_stock: true,
        featured,
        rating: Some(rating),
        reviews: Some(reviews),
        created_at: None,
        updated_at: None,
    }
}

/// The six sample products written to `products.json` when the collection
/// is first created. Identifiers are minted fresh per seeding.
#[must_use]
pub fn initial_products() -> Vec<Product> {
    vec![
        product(
            "Handwoven Kashmiri Pashmina Shawl",
            "Handicrafts",
            8500.0,
            12000.0,
            "Authentic Kashmiri pashmina shawl handwoven by master artisans. Made from the finest cashmere wool.",
            "/images/pashmina-shawl.jpg",
            ["/images/pashmina-1.jpg", "/images/pashmina-2.jpg"],
            "Mohammad Ali Khan",
            "Kashmir, India",
            true,
            4.8,
            23,
        ),
        product(
            "Organic Himalayan Pink Salt",
            "Spices & Food",
            350.0,
            450.0,
            "Pure, unrefined pink salt from the pristine Himalayan mountains. Rich in minerals and natural flavor.",
            "/images/himalayan-salt.jpg",
            ["/images/salt-1.jpg", "/images/salt-2.jpg"],
            "Himalayan Harvest Co-op",
            "Himachal Pradesh, India",
            true,
            4.9,
            156,
        ),
        product(
            "Ayurvedic Turmeric Wellness Tea",
            "Wellness",
            650.0,
            850.0,
            "Traditional Ayurvedic blend with organic turmeric, ginger, and healing herbs. Promotes immunity and wellness.",
            "/images/turmeric-tea.jpg",
            ["/images/tea-1.jpg", "/images/tea-2.jpg"],
            "Kerala Ayurveda Collective",
            "Kerala, India",
            true,
            4.7,
            89,
        ),
        product(
            "Brass Temple Bell Set",
            "Handicrafts",
            1200.0,
            1600.0,
            "Handcrafted brass temple bells with intricate carvings. Perfect for meditation and spiritual practices.",
            "/images/temple-bells.jpg",
            ["/images/bells-1.jpg", "/images/bells-2.jpg"],
            "Rajesh Kumar",
            "Rajasthan, India",
            false,
            4.6,
            34,
        ),
        product(
            "Organic Cardamom Pods",
            "Spices & Food",
            800.0,
            1000.0,
            "Premium green cardamom pods from the Western Ghats. Aromatic and flavorful spice for cooking and tea.",
            "/images/cardamom.jpg",
            ["/images/cardamom-1.jpg", "/images/cardamom-2.jpg"],
            "Spice Gardens Collective",
            "Karnataka, India",
            false,
            4.8,
            67,
        ),
        product(
            "Neem & Tulsi Face Care Set",
            "Wellness",
            950.0,
            1250.0,
            "Natural skincare set with neem and tulsi extracts. Cleanses and nourishes skin naturally.",
            "/images/face-care.jpg",
            ["/images/skincare-1.jpg", "/images/skincare-2.jpg"],
            "Herbal Beauty Co-op",
            "Tamil Nadu, India",
            false,
            4.5,
            112,
        ),
    ]
}

use crate::models::{Host, Listing};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in dataset served when no listings file is configured
#[derive(Debug, Default)]
pub struct MockListingSource;

impl MockListingSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        let listings = mock_listings();
        info!("📋 Loaded {} built-in listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Built-in"
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn host(name: &str, avatar: &str, joined_date: &str) -> Host {
    Host {
        name: name.to_string(),
        avatar: avatar.to_string(),
        joined_date: joined_date.to_string(),
    }
}

/// The static listing dataset
pub fn mock_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Oceanfront Villa with Infinity Pool".to_string(),
            location: "Malibu, California".to_string(),
            price: 450,
            rating: 4.95,
            review_count: 128,
            kind: "Entire villa".to_string(),
            host: host("Sarah", "https://images.example.com/hosts/sarah.jpg", "2018"),
            guests: 8,
            bedrooms: 4,
            beds: 5,
            baths: 3,
            description: "Wake up to the sound of waves in this villa perched above the Pacific. \
                The infinity pool blends into the horizon and the beach is a short walk away."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/1/main.jpg",
                "https://images.example.com/listings/1/pool.jpg",
                "https://images.example.com/listings/1/living.jpg",
                "https://images.example.com/listings/1/bedroom.jpg",
                "https://images.example.com/listings/1/view.jpg",
            ]),
            amenities: strings(&["WiFi", "Pool", "Kitchen", "Air conditioning", "Free parking"]),
        },
        Listing {
            id: "2".to_string(),
            title: "Cozy Mountain Cabin near the Slopes".to_string(),
            location: "Aspen, Colorado".to_string(),
            price: 275,
            rating: 4.88,
            review_count: 94,
            kind: "Entire cabin".to_string(),
            host: host("Michael", "https://images.example.com/hosts/michael.jpg", "2019"),
            guests: 6,
            bedrooms: 3,
            beds: 4,
            baths: 2,
            description: "A timber cabin ten minutes from the lifts, with a stone fireplace \
                and a deck looking out over the valley."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/2/main.jpg",
                "https://images.example.com/listings/2/fireplace.jpg",
                "https://images.example.com/listings/2/deck.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Fireplace", "Heating", "Free parking"]),
        },
        Listing {
            id: "3".to_string(),
            title: "Modern Loft in the Heart of Downtown".to_string(),
            location: "New York, New York".to_string(),
            price: 195,
            rating: 4.72,
            review_count: 311,
            kind: "Entire loft".to_string(),
            host: host("David", "https://images.example.com/hosts/david.jpg", "2016"),
            guests: 2,
            bedrooms: 1,
            beds: 1,
            baths: 1,
            description: "Exposed brick, high ceilings and a short walk to the subway. \
                Ideal for a city break."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/3/main.jpg",
                "https://images.example.com/listings/3/kitchen.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Air conditioning", "Heating"]),
        },
        Listing {
            id: "4".to_string(),
            title: "Beachside Bungalow with Private Pool".to_string(),
            location: "Miami, Florida".to_string(),
            price: 320,
            rating: 4.81,
            review_count: 76,
            kind: "Entire bungalow".to_string(),
            host: host("Elena", "https://images.example.com/hosts/elena.jpg", "2020"),
            guests: 4,
            bedrooms: 2,
            beds: 2,
            baths: 2,
            description: "A bright bungalow steps from the sand with a private plunge pool \
                and a shaded patio."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/4/main.jpg",
                "https://images.example.com/listings/4/pool.jpg",
                "https://images.example.com/listings/4/patio.jpg",
            ]),
            amenities: strings(&["WiFi", "Pool", "Air conditioning", "Free parking"]),
        },
        Listing {
            id: "5".to_string(),
            title: "Lakeside Retreat with Hot Tub".to_string(),
            location: "Lake Tahoe, California".to_string(),
            price: 380,
            rating: 4.9,
            review_count: 57,
            kind: "Entire home".to_string(),
            host: host("James", "https://images.example.com/hosts/james.jpg", "2017"),
            guests: 10,
            bedrooms: 5,
            beds: 6,
            baths: 4,
            description: "Room for the whole family on the north shore, with a private dock \
                and a hot tub under the pines."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/5/main.jpg",
                "https://images.example.com/listings/5/dock.jpg",
                "https://images.example.com/listings/5/hot-tub.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Fireplace", "Heating", "Hot tub", "Free parking"]),
        },
        Listing {
            id: "6".to_string(),
            title: "Desert Oasis with Mountain Views".to_string(),
            location: "Scottsdale, Arizona".to_string(),
            price: 240,
            rating: 4.76,
            review_count: 142,
            kind: "Entire guesthouse".to_string(),
            host: host("Maria", "https://images.example.com/hosts/maria.jpg", "2019"),
            guests: 4,
            bedrooms: 2,
            beds: 2,
            baths: 1,
            description: "A quiet casita with a saltwater pool and sunsets over the McDowell \
                Mountains."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/6/main.jpg",
                "https://images.example.com/listings/6/pool.jpg",
            ]),
            amenities: strings(&["WiFi", "Pool", "Kitchen", "Air conditioning"]),
        },
        Listing {
            id: "7".to_string(),
            title: "Cliffside Cottage with Fireplace".to_string(),
            location: "Malibu, California".to_string(),
            price: 310,
            rating: 4.85,
            review_count: 63,
            kind: "Entire cottage".to_string(),
            host: host("Olivia", "https://images.example.com/hosts/olivia.jpg", "2021"),
            guests: 3,
            bedrooms: 1,
            beds: 2,
            baths: 1,
            description: "A small cottage on the bluffs with a wood-burning fireplace and a \
                path down to a secluded cove."
                .to_string(),
            images: strings(&[
                "https://images.example.com/listings/7/main.jpg",
                "https://images.example.com/listings/7/cove.jpg",
            ]),
            amenities: strings(&["WiFi", "Fireplace", "Heating", "Kitchen"]),
        },
        Listing {
            id: "8".to_string(),
            title: "Historic Townhouse in the Old Quarter".to_string(),
            location: "Charleston, South Carolina".to_string(),
            price: 210,
            rating: 4.69,
            review_count: 88,
            kind: "Entire townhouse".to_string(),
            host: host("Robert", "https://images.example.com/hosts/robert.jpg", "2015"),
            guests: 5,
            bedrooms: 2,
            beds: 3,
            baths: 2,
            description: "An 1840s townhouse with a walled garden, a block from the waterfront."
                .to_string(),
            images: strings(&["https://images.example.com/listings/8/main.jpg"]),
            amenities: strings(&["Kitchen", "Air conditioning", "Heating"]),
        },
    ]
}

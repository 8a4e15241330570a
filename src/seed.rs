//! Sample profiles for populating an empty directory.

use soroban_sdk::{Env, String, Vec};

use crate::fields::{ContactField, ContactInfo, Coordinates};
use crate::profile::NewProfile;

struct Sample {
    name: &'static str,
    photo: &'static str,
    description: &'static str,
    address: &'static str,
    lat: i64,
    lng: i64,
    email: &'static str,
    phone: &'static str,
    website: Option<&'static str>,
    interests: [&'static str; 3],
}

const SAMPLES: [Sample; 5] = [
    Sample {
        name: "John Doe",
        photo: "https://randomuser.me/api/portraits/men/1.jpg",
        description: "Software Developer with 5 years of experience in React and Node.js",
        address: "123 Tech Street, San Francisco, CA",
        lat: 37_774_900,
        lng: -122_419_400,
        email: "john.doe@example.com",
        phone: "+1 (555) 123-4567",
        website: Some("johndoe.example.com"),
        interests: ["Programming", "Hiking", "Photography"],
    },
    Sample {
        name: "Jane Smith",
        photo: "https://randomuser.me/api/portraits/women/1.jpg",
        description: "UX Designer specializing in user research and interface design",
        address: "456 Design Ave, New York, NY",
        lat: 40_712_800,
        lng: -74_006_000,
        email: "jane.smith@example.com",
        phone: "+1 (555) 987-6543",
        website: None,
        interests: ["Design", "Art", "Travel"],
    },
    Sample {
        name: "Robert Johnson",
        photo: "https://randomuser.me/api/portraits/men/2.jpg",
        description: "Data Scientist with expertise in machine learning and AI",
        address: "789 Data Drive, Seattle, WA",
        lat: 47_606_200,
        lng: -122_332_100,
        email: "robert.johnson@example.com",
        phone: "+1 (555) 456-7890",
        website: Some("robertjohnson.example.com"),
        interests: ["Data Science", "Machine Learning", "Chess"],
    },
    Sample {
        name: "Emily Davis",
        photo: "https://randomuser.me/api/portraits/women/2.jpg",
        description: "Marketing Manager with 8 years of experience in digital marketing",
        address: "101 Marketing Blvd, Austin, TX",
        lat: 30_267_200,
        lng: -97_743_100,
        email: "emily.davis@example.com",
        phone: "+1 (555) 234-5678",
        website: None,
        interests: ["Marketing", "Social Media", "Reading"],
    },
    Sample {
        name: "Michael Wilson",
        photo: "https://randomuser.me/api/portraits/men/3.jpg",
        description: "Product Manager with a background in software development",
        address: "222 Product Road, Chicago, IL",
        lat: 41_878_100,
        lng: -87_629_800,
        email: "michael.wilson@example.com",
        phone: "+1 (555) 876-5432",
        website: None,
        interests: ["Product Management", "Technology", "Running"],
    },
];

/// The built-in sample profiles, in listing order.
pub fn sample_profiles(env: &Env) -> Vec<NewProfile> {
    let mut profiles = Vec::new(env);

    for sample in SAMPLES.iter() {
        let mut contact = ContactInfo::empty()
            .with_email(String::from_str(env, sample.email))
            .with_phone(String::from_str(env, sample.phone));
        if let Some(website) = sample.website {
            contact = contact.with_website(String::from_str(env, website));
        }

        let mut interests = Vec::new(env);
        for interest in sample.interests.iter() {
            interests.push_back(String::from_str(env, interest));
        }

        profiles.push_back(NewProfile {
            name: String::from_str(env, sample.name),
            photo: String::from_str(env, sample.photo),
            description: String::from_str(env, sample.description),
            address: String::from_str(env, sample.address),
            coordinates: Coordinates::new(sample.lat, sample.lng),
            contact_info: ContactField::Present(contact),
            interests: Some(interests),
        });
    }

    profiles
}

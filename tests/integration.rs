//! Integration tests for the profile directory contract.

use soroban_sdk::{
    testutils::Events as _, vec, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};
use soroban_profile_directory::{
    ContactField, ContactInfo, ContactUpdate, Coordinates, CoordinatesUpdate, DirectoryError,
    NewProfile, Profile, ProfileDirectoryContract, ProfileDirectoryContractClient, ProfileUpdate,
    SearchFilters,
};

fn setup() -> (Env, ProfileDirectoryContractClient<'static>) {
    let env = Env::default();

    let contract_id = env.register(ProfileDirectoryContract, ());
    let client = ProfileDirectoryContractClient::new(&env, &contract_id);

    (env, client)
}

fn new_profile(env: &Env, name: &str, address: &str, interests: &[&str]) -> NewProfile {
    let mut tags = Vec::new(env);
    for tag in interests {
        tags.push_back(String::from_str(env, tag));
    }

    NewProfile {
        name: String::from_str(env, name),
        photo: String::from_str(env, "https://randomuser.me/api/portraits/men/1.jpg"),
        description: String::from_str(env, "Software Developer"),
        address: String::from_str(env, address),
        coordinates: Coordinates::new(37_774_900, -122_419_400),
        contact_info: ContactField::Absent,
        interests: if interests.is_empty() { None } else { Some(tags) },
    }
}

fn ids(profiles: &Vec<Profile>) -> std::vec::Vec<u64> {
    profiles.iter().map(|p| p.id).collect()
}

/// Topic and id of the most recent event published by the contract.
fn last_event(env: &Env, client: &ProfileDirectoryContractClient) -> (Vec<Val>, u64) {
    let (contract, topics, data) = env.events().all().last().unwrap();
    assert_eq!(contract, client.address);
    (topics, u64::try_from_val(env, &data).unwrap())
}

fn topic(env: &Env, name: &str) -> Vec<Val> {
    (Symbol::new(env, name),).into_val(env)
}

fn has_event(env: &Env, name: &str) -> bool {
    let expected = topic(env, name);
    env.events().all().iter().any(|(_, topics, _)| topics == expected)
}

#[test]
fn test_empty_directory() {
    let (_env, client) = setup();

    assert_eq!(client.profile_count(), 0);
    assert!(client.list_profiles().is_empty());
    assert!(client.get_profile(&1).is_none());
}

#[test]
fn test_create_and_get_round_trip() {
    let (env, client) = setup();
    let mut data = new_profile(&env, "John Doe", "123 Tech Street, San Francisco, CA", &["Hiking"]);
    data.contact_info = ContactInfo::empty()
        .with_email(String::from_str(&env, "john.doe@example.com"))
        .with_website(String::from_str(&env, "johndoe.example.com"))
        .into();

    let created = client.create_profile(&data);
    assert_eq!(created.id, 1);
    assert_eq!(created.name, data.name);
    assert_eq!(created.contact_info, data.contact_info);

    assert_eq!(client.get_profile(&created.id), Some(created));
    assert_eq!(client.profile_count(), 1);
}

#[test]
fn test_ids_are_unique_across_deletes() {
    let (env, client) = setup();

    let a = client.create_profile(&new_profile(&env, "A", "Here", &[]));
    let b = client.create_profile(&new_profile(&env, "B", "Here", &[]));
    assert!(client.delete_profile(&b.id));
    let c = client.create_profile(&new_profile(&env, "C", "Here", &[]));
    assert!(client.delete_profile(&a.id));
    let d = client.create_profile(&new_profile(&env, "D", "Here", &[]));

    let mut all = std::vec![a.id, b.id, c.id, d.id];
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 4);

    assert_eq!(ids(&client.list_profiles()), std::vec![c.id, d.id]);
}

#[test]
fn test_update_merges_top_level_fields() {
    let (env, client) = setup();
    let mut data = new_profile(&env, "John Doe", "Austin, TX", &["Chess"]);
    data.contact_info = ContactInfo::empty()
        .with_email(String::from_str(&env, "a@x.com"))
        .into();
    let created = client.create_profile(&data);

    let mut update = ProfileUpdate::empty();
    update.contact_info =
        ContactUpdate::Replace(ContactInfo::empty().with_phone(String::from_str(&env, "123")));
    let updated = client.update_profile(&created.id, &update).unwrap();

    // Whole-field replace: the email is gone.
    assert_eq!(
        updated.contact_info,
        ContactField::Present(ContactInfo::empty().with_phone(String::from_str(&env, "123")))
    );
    // Omitted fields keep their values.
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.interests, created.interests);
    assert_eq!(updated.id, created.id);

    assert_eq!(client.get_profile(&created.id), Some(updated));
}

#[test]
fn test_contact_info_absent_and_empty_are_distinct() {
    let (env, client) = setup();

    let absent = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &[]));
    let mut data = new_profile(&env, "Jane Smith", "Austin, TX", &[]);
    data.contact_info = ContactInfo::empty().into();
    let empty = client.create_profile(&data);

    assert_eq!(
        client.get_profile(&absent.id).unwrap().contact_info,
        ContactField::Absent
    );
    assert_eq!(
        client.get_profile(&empty.id).unwrap().contact_info,
        ContactField::Present(ContactInfo::empty())
    );
}

#[test]
fn test_update_clears_contact_info() {
    let (env, client) = setup();
    let mut data = new_profile(&env, "John Doe", "Austin, TX", &[]);
    data.contact_info = ContactInfo::empty()
        .with_email(String::from_str(&env, "a@x.com"))
        .into();
    let created = client.create_profile(&data);

    let mut update = ProfileUpdate::empty();
    update.contact_info = ContactUpdate::Clear;
    let updated = client.update_profile(&created.id, &update).unwrap();

    assert_eq!(updated.contact_info, ContactField::Absent);
    assert_eq!(updated.name, created.name);
    assert_eq!(client.get_profile(&created.id), Some(updated));
}

#[test]
fn test_update_coordinates() {
    let (env, client) = setup();
    let created = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &[]));

    let mut update = ProfileUpdate::empty();
    update.coordinates = CoordinatesUpdate::Replace(Coordinates::new(30_267_200, -97_743_100));
    let updated = client.update_profile(&created.id, &update).unwrap();

    assert_eq!(updated.coordinates, Coordinates::new(30_267_200, -97_743_100));
    assert_eq!(updated.address, created.address);
}

#[test]
fn test_update_unknown_id() {
    let (_env, client) = setup();

    assert_eq!(client.update_profile(&99, &ProfileUpdate::empty()), None);
}

#[test]
fn test_delete_is_final() {
    let (env, client) = setup();
    let created = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &[]));

    assert!(client.delete_profile(&created.id));
    assert!(client.get_profile(&created.id).is_none());
    assert!(!client.delete_profile(&created.id));
    assert_eq!(client.profile_count(), 0);
}

#[test]
fn test_search_and_combination() {
    let (env, client) = setup();
    client.create_profile(&new_profile(&env, "John Doe", "123 Tech Street, San Francisco, CA", &[]));
    let jane = client.create_profile(&new_profile(
        &env,
        "Jane Smith",
        "456 Design Ave, San Francisco, CA",
        &[],
    ));

    let filters = SearchFilters {
        name: Some(String::from_str(&env, "jane")),
        location: Some(String::from_str(&env, "san francisco")),
        interests: None,
    };
    let result = client.search_profiles(&filters);

    assert_eq!(ids(&result), std::vec![jane.id]);
}

#[test]
fn test_search_without_filters_lists_everything() {
    let (env, client) = setup();
    client.create_profile(&new_profile(&env, "John Doe", "San Francisco, CA", &[]));
    client.create_profile(&new_profile(&env, "Jane Smith", "New York, NY", &[]));
    client.create_profile(&new_profile(&env, "Emily Davis", "Austin, TX", &[]));

    let result = client.search_profiles(&SearchFilters::none());

    assert_eq!(result, client.list_profiles());
    assert_eq!(ids(&result), std::vec![1, 2, 3]);
}

#[test]
fn test_search_by_interest() {
    let (env, client) = setup();
    let robert = client.create_profile(&new_profile(
        &env,
        "Robert Johnson",
        "Seattle, WA",
        &["Data Science", "Machine Learning"],
    ));
    client.create_profile(&new_profile(&env, "Jane Smith", "New York, NY", &["Design"]));

    let mut filters = SearchFilters::none();
    filters.interests = Some(vec![&env, String::from_str(&env, "machine")]);
    assert_eq!(ids(&client.search_profiles(&filters)), std::vec![robert.id]);

    filters.interests = Some(vec![&env, String::from_str(&env, "basketball")]);
    assert!(client.search_profiles(&filters).is_empty());
}

#[test]
fn test_create_rejects_out_of_range_latitude() {
    let (env, client) = setup();
    let mut data = new_profile(&env, "John Doe", "Austin, TX", &[]);
    data.coordinates = Coordinates::from_degrees(95, 0);

    assert_eq!(
        client.try_create_profile(&data),
        Err(Ok(DirectoryError::LatitudeOutOfRange))
    );
    assert_eq!(client.profile_count(), 0);
}

#[test]
fn test_update_rejects_invalid_data() {
    let (env, client) = setup();
    let created = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &[]));

    let mut update = ProfileUpdate::empty();
    update.coordinates = CoordinatesUpdate::Replace(Coordinates::from_degrees(95, 0));
    assert_eq!(
        client.try_update_profile(&created.id, &update),
        Err(Ok(DirectoryError::LatitudeOutOfRange))
    );

    let mut update = ProfileUpdate::empty();
    update.contact_info =
        ContactUpdate::Replace(ContactInfo::empty().with_email(String::from_str(&env, "nope")));
    assert_eq!(
        client.try_update_profile(&created.id, &update),
        Err(Ok(DirectoryError::InvalidEmail))
    );

    let mut update = ProfileUpdate::empty();
    update.interests = Some(vec![
        &env,
        String::from_str(&env, "Art"),
        String::from_str(&env, "Art"),
    ]);
    assert_eq!(
        client.try_update_profile(&created.id, &update),
        Err(Ok(DirectoryError::DuplicateInterest))
    );

    assert_eq!(client.get_profile(&created.id), Some(created));
}

#[test]
fn test_create_rejects_blank_name() {
    let (env, client) = setup();
    let data = new_profile(&env, "  ", "Austin, TX", &[]);

    assert_eq!(client.try_create_profile(&data), Err(Ok(DirectoryError::EmptyName)));
}

#[test]
fn test_mutations_publish_events() {
    let (env, client) = setup();

    let created = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &[]));
    assert_eq!(last_event(&env, &client), (topic(&env, "profile_created"), created.id));

    let mut update = ProfileUpdate::empty();
    update.name = Some(String::from_str(&env, "Johnny"));
    client.update_profile(&created.id, &update);
    assert_eq!(last_event(&env, &client), (topic(&env, "profile_updated"), created.id));

    client.delete_profile(&created.id);
    assert_eq!(last_event(&env, &client), (topic(&env, "profile_deleted"), created.id));
}

#[test]
fn test_rejected_and_missed_mutations_publish_nothing() {
    let (env, client) = setup();

    let data = new_profile(&env, "  ", "Austin, TX", &[]);
    assert!(client.try_create_profile(&data).is_err());
    assert!(!has_event(&env, "profile_created"));

    let created = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &[]));

    let mut update = ProfileUpdate::empty();
    update.name = Some(String::from_str(&env, ""));
    assert!(client.try_update_profile(&created.id, &update).is_err());
    assert!(!has_event(&env, "profile_updated"));

    assert_eq!(client.update_profile(&99, &ProfileUpdate::empty()), None);
    assert!(!has_event(&env, "profile_updated"));

    assert!(!client.delete_profile(&99));
    assert!(!has_event(&env, "profile_deleted"));
}

#[test]
fn test_empty_update_changes_nothing() {
    let (env, client) = setup();
    let created = client.create_profile(&new_profile(&env, "John Doe", "Austin, TX", &["Chess"]));

    assert_eq!(
        client.update_profile(&created.id, &ProfileUpdate::empty()),
        Some(created.clone())
    );
    assert!(!has_event(&env, "profile_updated"));
    assert_eq!(client.get_profile(&created.id), Some(created));
}

#[cfg(feature = "sample-data")]
#[test]
fn test_seed_sample_profiles() {
    let (env, client) = setup();

    assert_eq!(client.seed_sample_profiles(), 5);
    assert_eq!(client.profile_count(), 5);

    // Seeding a populated directory is a no-op.
    assert_eq!(client.seed_sample_profiles(), 0);
    assert_eq!(client.profile_count(), 5);

    let mut filters = SearchFilters::none();
    filters.location = Some(String::from_str(&env, "seattle"));
    let result = client.search_profiles(&filters);
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.get(0).unwrap().name,
        String::from_str(&env, "Robert Johnson")
    );
}

use common::ProfileId;
use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Sunny", "Bouncy", "Giggly", "Cozy", "Sparkly", "Zippy", "Merry", "Dandy",
    "Plucky", "Breezy", "Chipper", "Snuggly", "Peppy", "Jolly", "Twinkly", "Dozy",
];

const ANIMALS: &[&str] = &[
    "Otter", "Bunny", "Panda", "Duckling", "Koala", "Puppy", "Kitten", "Penguin",
    "Fawn", "Cub", "Owlet", "Seal", "Piglet", "Lamb", "Joey", "Chick",
];

/// Picks a friendly default display name for a new profile.
pub fn generate_display_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let animal = ANIMALS[rng.random_range(0..ANIMALS.len())];
    format!("{} {}", adjective, animal)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KidProfile {
    pub id: ProfileId,
    pub display_name: String,
}

impl KidProfile {
    /// A profile with no chosen name gets a generated one.
    pub fn new(id: ProfileId, display_name: Option<String>) -> Self {
        Self {
            id,
            display_name: display_name.unwrap_or_else(generate_display_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_comes_from_the_lists() {
        for _ in 0..50 {
            let name = generate_display_name();
            let mut parts = name.splitn(2, ' ');
            let adjective = parts.next().unwrap();
            let animal = parts.next().unwrap();
            assert!(ADJECTIVES.contains(&adjective));
            assert!(ANIMALS.contains(&animal));
        }
    }

    #[test]
    fn test_profile_keeps_chosen_name() {
        let profile = KidProfile::new(
            ProfileId::new("kid-1".to_string()),
            Some("Maya".to_string()),
        );
        assert_eq!(profile.display_name, "Maya");
    }

    #[test]
    fn test_profile_without_name_gets_generated_one() {
        let profile = KidProfile::new(ProfileId::new("kid-2".to_string()), None);
        assert!(!profile.display_name.is_empty());
        assert!(profile.display_name.contains(' '));
    }
}

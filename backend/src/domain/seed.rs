//! Sample listeners loaded into a fresh store.

use crate::domain::NewListener;

struct SeedListener {
    name: &'static str,
    bio: &'static str,
    specialties: &'static [&'static str],
    languages: &'static [&'static str],
    rating: &'static str,
    review_count: u32,
    image_url: &'static str,
}

const SAMPLE_LISTENERS: [SeedListener; 6] = [
    SeedListener {
        name: "Sarah Chen",
        bio: "Licensed social worker with 8 years experience. Specializes in anxiety management and workplace stress. Fluent in English and Mandarin.",
        specialties: &["Anxiety", "Stress", "Career"],
        languages: &["English", "中文"],
        rating: "4.9",
        review_count: 127,
        image_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    },
    SeedListener {
        name: "Marcus Johnson",
        bio: "Certified peer support specialist focusing on relationship challenges and major life transitions. Warm, empathetic listening style.",
        specialties: &["Relationships", "Life Changes", "Grief"],
        languages: &["English", "Español"],
        rating: "4.8",
        review_count: 94,
        image_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face",
    },
    SeedListener {
        name: "Lisa Rodriguez",
        bio: "Psychology graduate specializing in LGBTQ+ support and young adult challenges. Creates inclusive and affirming spaces for all identities.",
        specialties: &["LGBTQ+", "Young Adults", "Identity"],
        languages: &["English", "Français"],
        rating: "5.0",
        review_count: 73,
        image_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    },
    SeedListener {
        name: "Dr. James Wilson",
        bio: "Former therapist turned peer support advocate. Specializes in men's mental health and addiction recovery support.",
        specialties: &["Men's Health", "Addiction", "Recovery"],
        languages: &["English"],
        rating: "4.7",
        review_count: 156,
        image_url: "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400&h=400&fit=crop&crop=face",
    },
    SeedListener {
        name: "Maya Patel",
        bio: "Mindfulness coach and peer counselor with expertise in cultural transition challenges and family dynamics.",
        specialties: &["Cultural Issues", "Family", "Mindfulness"],
        languages: &["English", "हिन्दी", "ગુજરાતી"],
        rating: "4.9",
        review_count: 82,
        image_url: "https://images.unsplash.com/photo-1607990281513-2c110a25bd8c?w=400&h=400&fit=crop&crop=face",
    },
    SeedListener {
        name: "Alex Thompson",
        bio: "Creative arts therapist specializing in depression support and creative expression as healing. Non-binary and LGBTQ+ affirming.",
        specialties: &["Depression", "Creative Therapy", "LGBTQ+"],
        languages: &["English"],
        rating: "4.8",
        review_count: 91,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// The six sample listeners, in the order they receive ids.
#[must_use]
pub fn sample_listeners() -> Vec<NewListener> {
    SAMPLE_LISTENERS
        .iter()
        .map(|seed| NewListener {
            name: seed.name.to_owned(),
            bio: seed.bio.to_owned(),
            specialties: owned(seed.specialties),
            languages: owned(seed.languages),
            image_url: seed.image_url.to_owned(),
            rating: Some(seed.rating.to_owned()),
            review_count: Some(seed.review_count),
            is_available: Some(true),
        })
        .collect()
}

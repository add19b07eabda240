//! Palette: fresh blocks with the default property set of their kind

use std::sync::atomic::{AtomicU64, Ordering};

use super::content::*;
use super::{Block, BlockKind};

/// Source of new block ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, kind: BlockKind) -> String;
}

/// Random v4 UUIDs, prefixed with the kind for readability
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self, kind: BlockKind) -> String {
        format!("{}-{}", kind.as_str(), uuid::Uuid::new_v4().simple())
    }
}

/// Deterministic ids (`text-1`, `image-2`, ...) for tests and fixtures
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(n: u64) -> Self {
        Self {
            next: AtomicU64::new(n),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, kind: BlockKind) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", kind.as_str(), n)
    }
}

fn link(id: &str, text: &str, url: &str) -> Link {
    Link {
        id: id.to_string(),
        text: text.to_string(),
        url: url.to_string(),
    }
}

/// Default content for a kind, as inserted from the palette
pub fn default_content(kind: BlockKind) -> BlockContent {
    match kind {
        BlockKind::Header => BlockContent::Header(HeaderContent {
            logo: None,
            logo_alt: "Logo".into(),
            logo_width: Some(120.0),
            logo_height: Some(40.0),
            company_name: "Company Name".into(),
            links: vec![
                link("link-1", "Home", "https://example.com"),
                link("link-2", "Blog", "https://example.com/blog"),
            ],
        }),
        BlockKind::Text => BlockContent::Text(TextContent {
            content: "Add your text here".into(),
        }),
        BlockKind::Title => BlockContent::Title(TextContent {
            content: "Your Title Here".into(),
        }),
        BlockKind::Image => BlockContent::Image(ImageContent {
            src: String::new(),
            alt: "Image".into(),
            link_target: None,
            link_tooltip: None,
        }),
        BlockKind::Hero => BlockContent::Hero(HeroContent {
            headline: "Build something people love".into(),
            subheading: "A short sentence that explains the offer.".into(),
            cta_text: "Get Started".into(),
            cta_url: "https://example.com".into(),
            background_image: None,
        }),
        BlockKind::Features => BlockContent::Features(FeaturesContent {
            heading: "Features".into(),
            items: (1..=3)
                .map(|i| FeatureItem {
                    title: format!("Feature {i}"),
                    description: "Describe what makes this feature useful.".into(),
                    icon: None,
                })
                .collect(),
            columns: 3,
        }),
        BlockKind::Testimonials => BlockContent::Testimonials(TestimonialsContent {
            heading: "What our customers say".into(),
            items: vec![Testimonial {
                quote: "This product changed how our team works.".into(),
                author: "Jane Doe".into(),
                role: "Head of Marketing".into(),
            }],
        }),
        BlockKind::About => BlockContent::About(AboutContent {
            heading: "About Us".into(),
            body: "Tell your story here.".into(),
            image: None,
        }),
        BlockKind::ContactForm => BlockContent::ContactForm(ContactFormContent {
            heading: "Contact Us".into(),
            fields: vec![
                FormField {
                    label: "Name".into(),
                    field_type: FieldType::Text,
                    required: true,
                },
                FormField {
                    label: "Email".into(),
                    field_type: FieldType::Email,
                    required: true,
                },
                FormField {
                    label: "Message".into(),
                    field_type: FieldType::Textarea,
                    required: false,
                },
            ],
            submit_text: "Send".into(),
            action: None,
        }),
        BlockKind::Footer => BlockContent::Footer(FooterContent {
            company_name: "Company Name".into(),
            address: "123 Main Street, City".into(),
            links: vec![link("link-1", "Privacy", "https://example.com/privacy")],
            copyright: "All rights reserved.".into(),
            unsubscribe_text: "Unsubscribe".into(),
            unsubscribe_url: "https://example.com/unsubscribe".into(),
        }),
        BlockKind::Spacer => BlockContent::Spacer(SpacerContent {}),
        BlockKind::Pricing => BlockContent::Pricing(PricingContent {
            heading: "Pricing".into(),
            plans: vec![
                PricingPlan {
                    name: "Starter".into(),
                    price: "$9".into(),
                    period: "/month".into(),
                    features: vec!["1 user".into(), "Email support".into()],
                    cta_text: "Choose".into(),
                    cta_url: "https://example.com/starter".into(),
                    highlighted: false,
                },
                PricingPlan {
                    name: "Pro".into(),
                    price: "$29".into(),
                    period: "/month".into(),
                    features: vec!["10 users".into(), "Priority support".into()],
                    cta_text: "Choose".into(),
                    cta_url: "https://example.com/pro".into(),
                    highlighted: true,
                },
            ],
        }),
        BlockKind::Faq => BlockContent::Faq(FaqContent {
            heading: "Frequently Asked Questions".into(),
            items: vec![FaqItem {
                question: "How does it work?".into(),
                answer: "Explain it in a sentence or two.".into(),
            }],
        }),
        BlockKind::Signup => BlockContent::Signup(SignupContent {
            heading: "Stay in the loop".into(),
            description: "Get product news in your inbox.".into(),
            placeholder: "you@example.com".into(),
            button_text: "Subscribe".into(),
            button_url: "https://example.com/subscribe".into(),
        }),
    }
}

/// A new block of `kind` with a freshly minted id and default properties.
///
/// Style is left empty so every property resolves through the kind defaults.
pub fn new_block(kind: BlockKind, ids: &dyn IdGenerator) -> Block {
    Block::new(ids.next_id(kind), default_content(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_matching_default_content() {
        for kind in BlockKind::ALL {
            assert_eq!(default_content(kind).kind(), kind);
        }
    }

    #[test]
    fn sequential_ids_are_deterministic() {
        let ids = SequentialIds::new();
        assert_eq!(new_block(BlockKind::Text, &ids).id, "text-1");
        assert_eq!(new_block(BlockKind::Image, &ids).id, "image-2");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let a = UuidIds.next_id(BlockKind::Hero);
        let b = UuidIds.next_id(BlockKind::Hero);
        assert!(a.starts_with("hero-"));
        assert_ne!(a, b);
    }
}

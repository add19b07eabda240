//! Kind-specific block content

use serde::{Deserialize, Serialize};

use super::BlockKind;

/// Tagged union over block kinds. The JSON tag is `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockContent {
    Header(HeaderContent),
    Text(TextContent),
    Title(TextContent),
    Image(ImageContent),
    Hero(HeroContent),
    Features(FeaturesContent),
    Testimonials(TestimonialsContent),
    About(AboutContent),
    ContactForm(ContactFormContent),
    Footer(FooterContent),
    Spacer(SpacerContent),
    Pricing(PricingContent),
    Faq(FaqContent),
    Signup(SignupContent),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Header(_) => BlockKind::Header,
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Title(_) => BlockKind::Title,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Hero(_) => BlockKind::Hero,
            BlockContent::Features(_) => BlockKind::Features,
            BlockContent::Testimonials(_) => BlockKind::Testimonials,
            BlockContent::About(_) => BlockKind::About,
            BlockContent::ContactForm(_) => BlockKind::ContactForm,
            BlockContent::Footer(_) => BlockKind::Footer,
            BlockContent::Spacer(_) => BlockKind::Spacer,
            BlockContent::Pricing(_) => BlockKind::Pricing,
            BlockContent::Faq(_) => BlockKind::Faq,
            BlockContent::Signup(_) => BlockKind::Signup,
        }
    }

    /// The free-text content of text-like blocks
    pub fn text(&self) -> Option<&str> {
        match self {
            BlockContent::Text(t) | BlockContent::Title(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// A navigation or footer link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub id: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderContent {
    pub logo: Option<String>,
    pub logo_alt: String,
    pub logo_width: Option<f64>,
    pub logo_height: Option<f64>,
    pub company_name: String,
    pub links: Vec<Link>,
}

/// Content of `text` and `title` blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    /// Remote URL or embedded `data:` URI; empty when nothing was uploaded yet
    pub src: String,
    pub alt: String,
    pub link_target: Option<String>,
    pub link_tooltip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub headline: String,
    pub subheading: String,
    pub cta_text: String,
    pub cta_url: String,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturesContent {
    pub heading: String,
    pub items: Vec<FeatureItem>,
    /// Items per row; 0 means "one row with every item"
    pub columns: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsContent {
    pub heading: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub heading: String,
    pub body: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormContent {
    pub heading: String,
    pub fields: Vec<FormField>,
    pub submit_text: String,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub company_name: String,
    pub address: String,
    pub links: Vec<Link>,
    pub copyright: String,
    pub unsubscribe_text: String,
    pub unsubscribe_url: String,
}

/// Spacers carry no content; their height lives in the style bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacerContent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_url: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingContent {
    pub heading: String,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqContent {
    pub heading: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupContent {
    pub heading: String,
    pub description: String,
    pub placeholder: String,
    pub button_text: String,
    pub button_url: String,
}

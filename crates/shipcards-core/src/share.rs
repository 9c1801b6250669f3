//! Outbound share links for a card.
//!
//! Every destination gets its own share-intent URL built from the card's
//! canonical deep link and a prefilled text. Values are percent-encoded
//! component by component, the way each destination's query contract
//! expects.

use tracing::{debug, warn};

use crate::config::{COPY_CONFIRMATION_MS, SITE_NAME};
use crate::deeplink::DeepLinkRequest;
use crate::types::{Card, CategoryId};

/// Path of the deck page on the published site
pub const CARDS_PATH: &str = "/cards";

/// Places a card can be shared to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShareDestination {
    LinkedIn,
    Email,
    X,
    Facebook,
    WhatsApp,
    Reddit,
}

impl ShareDestination {
    pub const ALL: [ShareDestination; 6] = [
        ShareDestination::LinkedIn,
        ShareDestination::Email,
        ShareDestination::X,
        ShareDestination::Facebook,
        ShareDestination::WhatsApp,
        ShareDestination::Reddit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareDestination::LinkedIn => "LinkedIn",
            ShareDestination::Email => "Email",
            ShareDestination::X => "X",
            ShareDestination::Facebook => "Facebook",
            ShareDestination::WhatsApp => "WhatsApp",
            ShareDestination::Reddit => "Reddit",
        }
    }

    /// Share-intent URL for this destination
    pub fn intent_url(&self, canonical_url: &str, share_text: &str, card_title: &str) -> String {
        let url = urlencoding::encode(canonical_url);
        let text = urlencoding::encode(share_text);
        match self {
            ShareDestination::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}&summary={}",
                url, text
            ),
            ShareDestination::Email => {
                let subject = format!("{} Card: {}", SHIP_YOURSELF, card_title);
                let body = format!("{}\n\n{}", share_text, canonical_url);
                format!(
                    "mailto:?subject={}&body={}",
                    urlencoding::encode(&subject),
                    urlencoding::encode(&body)
                )
            }
            ShareDestination::X => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                url, text
            ),
            ShareDestination::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                url, text
            ),
            ShareDestination::WhatsApp => {
                let message = format!("{} {}", share_text, canonical_url);
                format!(
                    "https://api.whatsapp.com/send?text={}",
                    urlencoding::encode(&message)
                )
            }
            ShareDestination::Reddit => format!(
                "https://www.reddit.com/submit?url={}&title={}",
                url, text
            ),
        }
    }
}

const SHIP_YOURSELF: &str = "Ship Yourself";

/// Curated share text for each published category
fn category_share_text(category_id: &str) -> Option<&'static str> {
    let text = match category_id {
        "mindset" => "Resilience isn't luck — it's momentum built one small move at a time. 🚀 Grabbing mindset shifts from Ship Yourself Cards!",
        "networking" => "Your next opportunity is hiding in a conversation you're one message away from starting. 🌐 Loving these networking prompts from Ship Yourself Cards.",
        "super-ic" => "Leading and building? That's the new design superpower. 💥 Ship Yourself Cards nails what modern designers need to thrive.",
        "interviewing" => "Interviews aren't exams — they're collaborations. 🎯 Prepping smarter (and calmer) with Ship Yourself Cards.",
        "storytelling" => "Your career story isn't a resume — it's a design project. 📖 Designing mine with new momentum thanks to Ship Yourself Cards.",
        "negotiation" => "Negotiating isn't just about salary — it's about designing your future. 📈 Smart strategies I'm picking up from Ship Yourself Cards.",
        "wildcards" => "Tiny moves. Big shifts. ✨ Drawing a wild card from Ship Yourself Cards to power up today's momentum!",
        _ => return None,
    };
    Some(text)
}

/// Text prefilled into a share for a card of `category_id`
pub fn share_text(category_id: &CategoryId, card_title: &str) -> String {
    category_share_text(category_id.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Check out \"{}\" from {}!", card_title, SITE_NAME))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
    pub destination: ShareDestination,
    pub url: String,
}

/// Everything the share menu of one card needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    /// Deep link reopening exactly this card
    pub canonical_url: String,
    pub share_text: String,
    /// Accent color the share menu is drawn in
    pub color: String,
    pub links: Vec<ShareLink>,
}

impl SharePayload {
    pub fn link(&self, destination: ShareDestination) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.destination == destination)
            .map(|link| link.url.as_str())
    }

    /// Canonical URL shortened for display in the copy box
    pub fn display_url(&self, max_chars: usize) -> String {
        if self.canonical_url.chars().count() > max_chars {
            let head: String = self.canonical_url.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            self.canonical_url.clone()
        }
    }
}

/// Builds [`SharePayload`]s against a site origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLinkBuilder {
    base_url: String,
}

impl ShareLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `<base>/cards?category=<id>&cardId=<card id>`
    pub fn canonical_url(&self, card: &Card, category_id: &CategoryId) -> String {
        let request = DeepLinkRequest::for_card(category_id.clone(), card.id.clone());
        format!("{}{}?{}", self.base_url, CARDS_PATH, request)
    }

    pub fn build(&self, card: &Card, category_id: &CategoryId, category_color: &str) -> SharePayload {
        let canonical_url = self.canonical_url(card, category_id);
        let share_text = share_text(category_id, &card.title);
        let links = ShareDestination::ALL
            .iter()
            .map(|destination| ShareLink {
                destination: *destination,
                url: destination.intent_url(&canonical_url, &share_text, &card.title),
            })
            .collect();

        debug!("Built share links for {} ({})", card.id, category_id);
        SharePayload {
            canonical_url,
            share_text,
            color: category_color.to_string(),
            links,
        }
    }
}

/// The transient "Copied" state after copying a link
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyConfirmation {
    copied_at_ms: Option<u64>,
}

impl CopyConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a clipboard write. Failures are logged and
    /// leave the state untouched.
    pub fn record<E: std::fmt::Display>(&mut self, result: Result<(), E>, now_ms: u64) {
        match result {
            Ok(()) => self.copied_at_ms = Some(now_ms),
            Err(e) => warn!("Failed to copy: {}", e),
        }
    }

    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.copied_at_ms
            .is_some_and(|at| now_ms.saturating_sub(at) < COPY_CONFIRMATION_MS)
    }

    pub fn reset(&mut self) {
        self.copied_at_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardId;

    fn card(id: &str, title: &str) -> Card {
        Card {
            id: CardId::new(id),
            category: "Offer + Negotiation".to_string(),
            title: title.to_string(),
            subtitle: String::new(),
            background_color: "#FFFFFF".to_string(),
            bullet_points: vec![],
            quote: None,
            quote_author: None,
        }
    }

    #[test]
    fn canonical_url_carries_deep_link() {
        let builder = ShareLinkBuilder::new("https://shipyourselfcards.com/");
        let url = builder.canonical_url(&card("negotiation-2", "T"), &CategoryId::new("negotiation"));
        assert_eq!(
            url,
            "https://shipyourselfcards.com/cards?category=negotiation&cardId=negotiation-2"
        );
    }

    #[test]
    fn negotiation_uses_curated_text() {
        let text = share_text(&CategoryId::new("negotiation"), "Know Your Worth");
        assert_eq!(
            text,
            "Negotiating isn't just about salary — it's about designing your future. 📈 Smart strategies I'm picking up from Ship Yourself Cards."
        );
    }

    #[test]
    fn unknown_category_falls_back_to_title() {
        let text = share_text(&CategoryId::new("side-quests"), "Ship It Friday");
        assert_eq!(text, "Check out \"Ship It Friday\" from Ship Yourself Cards!");
    }

    #[test]
    fn every_destination_gets_a_link() {
        let payload = ShareLinkBuilder::new("https://example.com").build(
            &card("negotiation-1", "Know Your Worth"),
            &CategoryId::new("negotiation"),
            "#3B7865",
        );
        assert_eq!(payload.links.len(), ShareDestination::ALL.len());
        assert_eq!(payload.color, "#3B7865");

        let encoded_url = "https%3A%2F%2Fexample.com%2Fcards%3Fcategory%3Dnegotiation%26cardId%3Dnegotiation-1";
        let linkedin = payload.link(ShareDestination::LinkedIn).unwrap();
        assert!(linkedin.starts_with("https://www.linkedin.com/sharing/share-offsite/?url="));
        assert!(linkedin.contains(encoded_url));
        assert!(linkedin.contains("&summary=Negotiating%20isn%27t"));

        let x = payload.link(ShareDestination::X).unwrap();
        assert!(x.starts_with("https://twitter.com/intent/tweet?url="));
        assert!(x.contains("&text="));

        let facebook = payload.link(ShareDestination::Facebook).unwrap();
        assert!(facebook.contains("sharer.php?u=") && facebook.contains("&quote="));

        let reddit = payload.link(ShareDestination::Reddit).unwrap();
        assert!(reddit.contains("submit?url=") && reddit.contains("&title="));
    }

    #[test]
    fn email_uses_subject_and_body() {
        let payload = ShareLinkBuilder::new("https://example.com").build(
            &card("negotiation-1", "Know Your Worth"),
            &CategoryId::new("negotiation"),
            "#3B7865",
        );
        let email = payload.link(ShareDestination::Email).unwrap();
        assert!(email.starts_with("mailto:?subject=Ship%20Yourself%20Card%3A%20Know%20Your%20Worth&body="));
        // Body is the share text, a blank line, then the link
        assert!(email.contains("%0A%0Ahttps%3A%2F%2Fexample.com%2Fcards"));

        let whatsapp = payload.link(ShareDestination::WhatsApp).unwrap();
        assert!(whatsapp.starts_with("https://api.whatsapp.com/send?text=Negotiating"));
        assert!(whatsapp.ends_with("cardId%3Dnegotiation-1"));
    }

    #[test]
    fn display_url_truncates() {
        let payload = ShareLinkBuilder::new("https://example.com").build(
            &card("negotiation-1", "T"),
            &CategoryId::new("negotiation"),
            "#000",
        );
        assert_eq!(payload.display_url(30), "https://example.com/cards?cate...");
        assert_eq!(payload.display_url(500), payload.canonical_url);
    }

    #[test]
    fn copy_confirmation_expires_after_two_seconds() {
        let mut confirmation = CopyConfirmation::new();
        confirmation.record(Ok::<(), String>(()), 1_000);
        assert!(confirmation.is_visible(1_000));
        assert!(confirmation.is_visible(2_999));
        assert!(!confirmation.is_visible(3_000));
    }

    #[test]
    fn copy_failure_is_swallowed() {
        let mut confirmation = CopyConfirmation::new();
        confirmation.record(Err("clipboard unavailable"), 0);
        assert!(!confirmation.is_visible(0));
    }
}

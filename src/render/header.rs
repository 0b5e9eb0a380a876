use crate::data::Profile;
use crate::dom::Document;
use crate::view::{PageBindings, Slot};

use super::{links, set_slot_text};

pub(super) fn render(document: &mut Document, bindings: &PageBindings, profile: &Profile) {
    let name = profile.name.as_deref();

    set_slot_text(document, bindings, Slot::Name, name);
    set_slot_text(document, bindings, Slot::Headline, profile.headline.as_deref());
    set_slot_text(document, bindings, Slot::HeroName, name);
    set_slot_text(document, bindings, Slot::HeroRole, profile.role.as_deref());
    set_slot_text(document, bindings, Slot::Summary, profile.summary.as_deref());
    set_slot_text(document, bindings, Slot::FooterName, name);

    let location = profile
        .location
        .as_deref()
        .filter(|location| !location.trim().is_empty())
        .map(|location| format!("📍 {location}"));
    set_slot_text(document, bindings, Slot::Location, location.as_deref());

    let initial = profile.initial();
    set_slot_text(document, bindings, Slot::Avatar, Some(initial.as_str()));

    let mailto = profile.mailto();
    let email = profile.email.as_deref().filter(|email| !email.trim().is_empty());
    let hero_label = email.map_or_else(|| "✉️ Email".to_string(), |email| format!("✉️ {email}"));
    bind_link(document, bindings, Slot::EmailLink, mailto.as_deref(), Some(hero_label.as_str()));
    bind_link(
        document,
        bindings,
        Slot::ContactEmail,
        mailto.as_deref(),
        Some(email.unwrap_or("Email")),
    );

    let profile_links = &profile.links;
    bind_link(document, bindings, Slot::ResumeLink, profile_links.resume.as_deref(), None);
    bind_link(document, bindings, Slot::GithubLink, profile_links.github.as_deref(), Some("GitHub"));
    bind_link(
        document,
        bindings,
        Slot::LinkedinLink,
        profile_links.linkedin.as_deref(),
        Some("LinkedIn"),
    );
    bind_link(
        document,
        bindings,
        Slot::ContactGithub,
        profile_links.github.as_deref(),
        Some("GitHub"),
    );
    bind_link(
        document,
        bindings,
        Slot::ContactLinkedin,
        profile_links.linkedin.as_deref(),
        Some("LinkedIn"),
    );
    bind_link(
        document,
        bindings,
        Slot::ContactResume,
        profile_links.resume.as_deref(),
        Some("Resume"),
    );
}

fn bind_link(
    document: &mut Document,
    bindings: &PageBindings,
    slot: Slot,
    href: Option<&str>,
    label: Option<&str>,
) {
    let Some(anchor) = bindings.element_mut(document, slot) else {
        return;
    };

    let target = links::bind(anchor, href);
    if !target.is_enabled() {
        tracing::debug!(slot = ?slot, reason = ?target.disabled_reason(), "link disabled");
    }
    if let Some(label) = label {
        anchor.set_text(Some(label));
    }
}

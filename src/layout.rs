//! Host page skeletons for each page variant.

use crate::dom::{Document, Element};
use crate::view::{PageDescriptor, Variant};

pub fn skeleton(descriptor: &PageDescriptor) -> Document {
    let body = match descriptor.variant {
        Variant::Portfolio => portfolio_body(),
        Variant::Showcase => showcase_body(),
    };

    Document::new(
        Element::new("html")
            .with_attr("lang", "en")
            .with_child(head(descriptor.variant))
            .with_child(body),
    )
}

fn head(variant: Variant) -> Element {
    Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(match variant {
            Variant::Portfolio => "Portfolio",
            Variant::Showcase => "Projects",
        }))
        .with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", "style.css"),
        )
}

fn nav(with_identity: bool) -> Element {
    let mut nav = Element::new("nav").with_class("nav");
    if with_identity {
        nav.append_child(
            Element::new("div")
                .with_class("brand")
                .with_child(Element::new("span").with_id("name"))
                .with_child(Element::new("small").with_id("headline").with_class("muted")),
        );
    }
    nav.with_child(
        Element::new("button")
            .with_id("themeBtn")
            .with_class("icon-btn")
            .with_attr("type", "button")
            .with_attr("aria-label", "Toggle theme"),
    )
}

fn anchor(id: &str, class: &str) -> Element {
    Element::new("a").with_id(id).with_class(class).with_attr("href", "#")
}

fn project_controls() -> Element {
    Element::new("div")
        .with_class("controls")
        .with_child(
            Element::new("input")
                .with_id("search")
                .with_attr("type", "search")
                .with_attr("placeholder", "Search projects"),
        )
        .with_child(Element::new("select").with_id("tagFilter"))
        .with_child(
            Element::new("button")
                .with_id("clearBtn")
                .with_class("btn ghost")
                .with_attr("type", "button")
                .with_text("Clear"),
        )
}

fn projects_section(grid_id: &str) -> Element {
    Element::new("section")
        .with_id("projects")
        .with_class("section scroll-reveal")
        .with_child(
            Element::new("div")
                .with_class("section-head")
                .with_child(Element::new("h2").with_text("Projects"))
                .with_child(project_controls()),
        )
        .with_child(Element::new("div").with_id(grid_id).with_class("grid"))
        .with_child(
            Element::new("p")
                .with_id("emptyState")
                .with_class("muted hidden")
                .with_text("No projects match your filters."),
        )
}

fn portfolio_body() -> Element {
    let hero = Element::new("section")
        .with_id("home")
        .with_class("hero")
        .with_child(
            Element::new("div")
                .with_id("heroLeft")
                .with_class("hero-left")
                .with_child(Element::new("div").with_id("avatar").with_class("avatar"))
                .with_child(Element::new("h1").with_id("heroName"))
                .with_child(Element::new("p").with_id("heroRole").with_class("role"))
                .with_child(Element::new("p").with_id("summary"))
                .with_child(Element::new("span").with_id("location").with_class("muted"))
                .with_child(
                    Element::new("div")
                        .with_class("hero-actions")
                        .with_child(anchor("emailLink", "btn"))
                        .with_child(anchor("resumeLink", "btn").with_text("Resume"))
                        .with_child(anchor("githubLink", "btn ghost"))
                        .with_child(anchor("linkedinLink", "btn ghost")),
                ),
        );

    let about = Element::new("section")
        .with_id("about")
        .with_class("section scroll-reveal")
        .with_child(
            Element::new("div")
                .with_class("section-head")
                .with_child(Element::new("h2").with_text("Highlights")),
        )
        .with_child(Element::new("ul").with_id("highlightsList").with_class("list"));

    let skills = Element::new("section")
        .with_id("skills")
        .with_class("section scroll-reveal")
        .with_child(
            Element::new("div")
                .with_class("section-head")
                .with_child(Element::new("h2").with_text("Skills")),
        )
        .with_child(Element::new("div").with_id("skillsGrid").with_class("grid"));

    let contact = Element::new("section")
        .with_id("contact")
        .with_class("section scroll-reveal")
        .with_child(
            Element::new("div")
                .with_class("section-head")
                .with_child(Element::new("h2").with_text("Contact")),
        )
        .with_child(
            Element::new("div")
                .with_class("contact-links")
                .with_child(anchor("contactEmail", "link-btn"))
                .with_child(anchor("contactGitHub", "link-btn"))
                .with_child(anchor("contactLinkedIn", "link-btn"))
                .with_child(anchor("contactResume", "link-btn")),
        );

    let footer = Element::new("footer")
        .with_class("footer")
        .with_child(Element::new("span").with_id("footerName"))
        .with_child(Element::new("span").with_text(" © "))
        .with_child(Element::new("span").with_id("year"));

    Element::new("body")
        .with_child(nav(true))
        .with_child(
            Element::new("main")
                .with_child(hero)
                .with_child(about)
                .with_child(projects_section("projectsGrid"))
                .with_child(skills)
                .with_child(contact),
        )
        .with_child(footer)
}

fn showcase_body() -> Element {
    let hero = Element::new("section")
        .with_id("home")
        .with_class("hero")
        .with_child(
            Element::new("div")
                .with_id("heroLeft")
                .with_class("hero-left")
                .with_child(Element::new("h1").with_text("Projects")),
        );

    let footer = Element::new("footer")
        .with_class("footer")
        .with_child(Element::new("span").with_text("© "))
        .with_child(Element::new("span").with_id("year"));

    Element::new("body")
        .with_child(nav(false))
        .with_child(
            Element::new("main")
                .with_child(hero)
                .with_child(projects_section("projectGrid")),
        )
        .with_child(footer)
}

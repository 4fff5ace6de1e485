//! HTML site generation.
//!
//! Renders the single page from a [`PageView`] snapshot of a freshly created
//! [`PageShell`]: every overlay closed, the carousel on its first photo, the
//! illustration at t=0. Interactivity in the browser comes from
//! `static/site.js`, which replays the same state transitions and reads its
//! timings from a JSON block the renderer embeds.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # The whole site, CSS and JS inlined
//! ├── pizza-base.svg             # Staged from <source>/assets/
//! ├── images/ingredients/*.svg
//! └── sounds/*.mp3
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/site.js`: navbar, overlays, carousel, showcase restart and sound
//!
//! The ingredient animation is emitted as one `@keyframes` rule per
//! ingredient, sampled from the same timelines the sequencer runs.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::assets::{self, AssetError, CopyStats, ExpectedAsset};
use crate::carousel::CarouselError;
use crate::config::{self, SiteConfig};
use crate::content::{self, Dish, MenuSection, NavLink};
use crate::overlay::OverlayKind;
use crate::reservation::{PLACEHOLDER_VALUE, PartySize, Service};
use crate::sequencer::{BASE_MOTION, BaseMotion, IngredientDescriptor, LANDING_SHADOW, PhaseTiming};
use crate::shell::{PageShell, PageView};
use crate::showcase::{CaptionRole, ShowcaseSettings};
use crate::sound::{AssetProbe, AudioBackend, Cue, CueVolumes};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub index_written: bool,
    pub assets: CopyStats,
    /// Optional assets that were missing from the source.
    pub missing_optional: Vec<ExpectedAsset>,
    /// Whether the page ships with working sound.
    pub sound_on: bool,
}

/// Build the site from `source_dir` into `output_dir`.
pub fn generate(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    let assets_dir = source_dir.join("assets");
    let missing_optional = assets::check_assets(&assets_dir)?;

    let shell = initial_shell(config, &assets_dir)?;
    let view = shell.view();
    let page = render_page(config, &shell, &view)?;

    std::fs::create_dir_all(output_dir)?;
    let mut html_stats = CopyStats::default();
    let index_written = assets::write_if_changed(
        &output_dir.join("index.html"),
        page.into_string().as_bytes(),
        &mut html_stats,
    )?;
    log::info!(
        "index.html {}",
        if index_written { "written" } else { "unchanged" }
    );

    let staged = assets::stage_assets(&assets_dir, output_dir)?;

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        index_written,
        assets: staged,
        missing_optional,
        sound_on: view.showcase.sound_on,
    })
}

/// Page state at load, with sound resolved against the staged clips.
pub fn initial_shell(
    config: &SiteConfig,
    assets_dir: &Path,
) -> Result<PageShell<AssetProbe>, CarouselError> {
    PageShell::new(
        AssetProbe::new(assets_dir),
        ShowcaseSettings::from_config(config),
        config.navbar.scroll_threshold,
    )
}

/// Render the whole page for `view`.
pub fn render_page<B: AudioBackend>(
    config: &SiteConfig,
    shell: &PageShell<B>,
    view: &PageView,
) -> Result<Markup, GenerateError> {
    let showcase = shell.showcase();
    let sequencer = showcase.sequencer();
    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC,
        showcase_css(sequencer.descriptors(), sequencer.timing())
    );
    let runtime = runtime_json(config, shell, view)?;

    let content = html! {
        (navbar(&config.site.name, view))
        main {
            (hero())
            (about(view, sequencer.descriptors(), showcase.settings().controls_delay))
            (menu_preview())
            (gallery())
            (contact())
        }
        (footer(&config.site.name, config.copyright_year()))
        (full_menu_overlay(view))
        (gallery_overlay(view))
        (image_viewer(view))
        script #site-runtime type="application/json" { (PreEscaped(runtime)) }
        script { (PreEscaped(JS)) }
    };

    let title = format!("{} | {}", config.site.name, content::HERO_TITLE);
    Ok(base_document(
        &title,
        &config.site.lang,
        &css,
        view.scroll_locked,
        content,
    ))
}

// ============================================================================
// Runtime data for site.js
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Runtime {
    scroll_threshold: f64,
    carousel_length: usize,
    controls_delay_ms: u128,
    completion_ms: u128,
    sound: SoundRuntime,
    cues: Vec<PlannedCue>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SoundRuntime {
    /// Mute control is shown.
    available: bool,
    /// Sound starts on.
    enabled: bool,
    clips: Vec<Clip>,
}

#[derive(Serialize)]
struct Clip {
    cue: Cue,
    src: &'static str,
    volume: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlannedCue {
    at_ms: u128,
    cue: Cue,
}

/// The JSON block `site.js` boots from. `</` is escaped so the payload cannot
/// close its `<script>` element.
pub fn runtime_json<B: AudioBackend>(
    config: &SiteConfig,
    shell: &PageShell<B>,
    view: &PageView,
) -> Result<String, serde_json::Error> {
    let showcase = shell.showcase();
    let settings = showcase.settings();
    let volumes: CueVolumes = settings.volumes;
    let runtime = Runtime {
        scroll_threshold: config.navbar.scroll_threshold,
        carousel_length: shell.carousel().len(),
        controls_delay_ms: settings.controls_delay.as_millis(),
        completion_ms: showcase.sequencer().completion().as_millis(),
        sound: SoundRuntime {
            available: view.showcase.mute_visible,
            enabled: view.showcase.sound_on,
            clips: Cue::ALL
                .into_iter()
                .map(|cue| Clip {
                    cue,
                    src: cue.source(),
                    volume: volumes.for_cue(cue),
                })
                .collect(),
        },
        cues: showcase
            .cue_plan()
            .into_iter()
            .map(|(at, cue)| PlannedCue {
                at_ms: at.as_millis(),
                cue,
            })
            .collect(),
    };
    Ok(serde_json::to_string(&runtime)?.replace("</", "<\\/"))
}

/// Illustration CSS: the pizza base entrance and wobble, then per ingredient
/// one `@keyframes` rule, one positioning rule and its landing shadow.
pub fn showcase_css(descriptors: &[IngredientDescriptor], timing: &PhaseTiming) -> String {
    let mut css = base_motion_css(&BASE_MOTION);
    css.push_str(
        "@keyframes landing-shadow {\n    \
         0% { opacity: 0; transform: scale(0.5); }\n    \
         20% { opacity: 0.7; transform: scale(1.2); }\n    \
         100% { opacity: 0.3; transform: scale(1); }\n}\n",
    );
    for (i, d) in descriptors.iter().enumerate() {
        css.push_str(&format!("@keyframes ingredient-{i} {{\n"));
        for frame in d.keyframes(timing) {
            css.push_str(&format!(
                "    {}% {{ transform: {}; opacity: {}; animation-timing-function: {}; }}\n",
                frame.offset,
                frame.pose.css_transform(),
                frame.pose.opacity,
                frame.easing
            ));
        }
        css.push_str("}\n");
        css.push_str(&format!(
            ".ingredient-{i} {{ left: {}%; width: {size}rem; height: {size}rem; z-index: {}; filter: {}; animation: ingredient-{i} {}ms linear both; }}\n",
            d.initial_x,
            d.z_index,
            d.shadow().to_css(),
            d.settled_at(timing).as_millis(),
            size = d.size_rem,
        ));
        css.push_str(&format!(
            ".ingredient-{i} .landing-shadow {{ animation: landing-shadow {}ms linear {}ms both; }}\n",
            LANDING_SHADOW.as_millis(),
            d.bounce_start().as_millis(),
        ));
    }
    css
}

/// Springy entrance of the pizza base, then its wobbles.
fn base_motion_css(motion: &BaseMotion) -> String {
    let mut frames: Vec<String> = motion
        .wobble_keyframes()
        .iter()
        .map(|(offset, deg)| format!("    {offset}% {{ rotate: {deg}deg; }}"))
        .collect();
    if motion.wobble_keyframes().last().is_some_and(|(offset, _)| *offset < 100.0) {
        frames.push("    100% { rotate: 0deg; }".to_string());
    }
    [
        "@keyframes pizza-base-in {".to_string(),
        "    from { transform: perspective(1000px) scale(0) rotateX(45deg); }".to_string(),
        "    to { transform: perspective(1000px) scale(1) rotateX(0deg); }".to_string(),
        "}".to_string(),
        "@keyframes pizza-base-wobble {".to_string(),
        frames.join("\n"),
        "}".to_string(),
        format!(
            ".pizza-base {{ animation: pizza-base-in {}ms cubic-bezier(0.34, 1.56, 0.64, 1) {}ms both; }}",
            motion.entrance.as_millis(),
            motion.entrance_delay.as_millis(),
        ),
        format!(
            ".pizza-base img {{ animation: pizza-base-wobble {}ms ease-in-out {}ms {}; }}",
            motion.wobble_cycle().as_millis(),
            motion.wobble_start.as_millis(),
            motion.wobbles,
        ),
        String::new(),
    ]
    .join("\n")
}

fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(markdown));
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, scroll_locked: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Dancing+Script:wght@700&family=Inter:wght@400;500;600&family=Playfair+Display:wght@700&display=swap";
                style { (PreEscaped(css)) }
            }
            body class=[scroll_locked.then_some("scroll-locked")] {
                (content)
            }
        }
    }
}

/// Inline icons. Paths are 24×24.
fn icon(name: &str) -> Markup {
    let path = match name {
        "menu" => "M3 6h18M3 12h18M3 18h18",
        "close" => "M6 6l12 12M18 6L6 18",
        "prev" => "M15 5l-7 7 7 7",
        "next" => "M9 5l7 7-7 7",
        "restart" => "M4 12a8 8 0 1 0 2.3-5.7M4 4v5h5",
        "sound" => "M4 9v6h4l5 4V5L8 9H4zM16 8a5 5 0 0 1 0 8",
        "phone" => "M5 4h4l2 5-3 2a11 11 0 0 0 5 5l2-3 5 2v4a2 2 0 0 1-2 2A16 16 0 0 1 3 6a2 2 0 0 1 2-2",
        "mail" => "M3 6h18v12H3zM3 6l9 7 9-7",
        "pin" => "M12 21s-7-6-7-11a7 7 0 0 1 14 0c0 5-7 11-7 11zM12 12a2 2 0 1 0 0-4 2 2 0 0 0 0 4",
        _ => "M4 12h16",
    };
    html! {
        svg.icon viewBox="0 0 24 24" aria-hidden="true" {
            path d=(path) {}
        }
    }
}

fn nav_links(links: &[NavLink], class: &str) -> Markup {
    html! {
        @for link in links {
            a class=(class) href={ "#" (link.target) } data-nav-link { (link.label) }
        }
    }
}

fn section_header(label: &str, title: &str) -> Markup {
    html! {
        p.section-label { (label) }
        h2.section-title { (title) }
        div.title-rule {}
    }
}

fn navbar(name: &str, view: &PageView) -> Markup {
    html! {
        header #navbar class={ "navbar" @if view.scrolled { " scrolled" } } {
            div.container.navbar-inner {
                a.brand href="#home" { (name) }
                nav.nav-desktop {
                    (nav_links(&content::NAV_LINKS, "nav-link"))
                    a.button.button-primary href={ "#" (content::NAV_CTA.target) } { (content::NAV_CTA.label) }
                }
                button #nav-toggle.nav-toggle type="button" aria-label="Menú"
                    aria-expanded=(view.nav_open) aria-controls="mobile-nav" {
                    (icon(if view.nav_open { "close" } else { "menu" }))
                }
            }
            nav #mobile-nav.nav-mobile hidden[!view.nav_open] {
                (nav_links(&content::NAV_LINKS, "nav-link"))
                a.button.button-primary href={ "#" (content::NAV_CTA.target) } data-nav-link { (content::NAV_CTA.label) }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section #home.hero style={ "background-image: url('" (content::HERO_IMAGE) "')" } {
            div.hero-shade {}
            div.container.hero-content {
                h1 { (content::HERO_TITLE) }
                p { (content::HERO_SUBTITLE) }
                div.hero-actions {
                    a.button.button-primary href="#menu" { (content::HERO_MENU_BUTTON) }
                    a.button.button-outline-light href="#contact" { (content::HERO_BOOK_BUTTON) }
                }
            }
        }
    }
}

fn about(
    view: &PageView,
    descriptors: &[IngredientDescriptor],
    controls_delay: Duration,
) -> Markup {
    html! {
        section #about.section {
            div.container.about-grid {
                div.about-copy {
                    (section_header(content::ABOUT_LABEL, content::ABOUT_TITLE))
                    div.prose { (PreEscaped(render_markdown(content::ABOUT_MARKDOWN))) }
                    div.stats {
                        @for stat in &content::STATS {
                            div.stat {
                                span.stat-value { (stat.value) }
                                span.stat-label { (stat.label) }
                            }
                        }
                    }
                }
                (pizza_showcase(view, descriptors, controls_delay))
            }
        }
    }
}

fn pizza_showcase(
    view: &PageView,
    descriptors: &[IngredientDescriptor],
    controls_delay: Duration,
) -> Markup {
    let showcase = &view.showcase;
    html! {
        div #pizza-stage.pizza-stage data-epoch=(showcase.epoch.get()) {
            div.pizza-scene {
                div.pizza-base {
                    img src=(content::PIZZA_BASE) alt="Base de pizza";
                }
                @for (i, d) in descriptors.iter().enumerate() {
                    div class={ "ingredient ingredient-" (i) } {
                        span.landing-shadow {}
                        img src=(d.topping.asset()) alt=(d.alt());
                    }
                }
                @for (i, caption) in content::SHOWCASE_CAPTIONS.iter().enumerate() {
                    @let role = match caption.role {
                        CaptionRole::Badge => "caption caption-badge",
                        CaptionRole::Title => "caption caption-title",
                        CaptionRole::Subtitle => "caption caption-subtitle",
                    };
                    div class={ (role) " caption-" (i) } style={ "animation-delay: " (caption.delay_ms) "ms" } {
                        (caption.text)
                    }
                }
            }
            div.showcase-controls style={ "--controls-delay: " (controls_delay.as_millis().to_string()) "ms" } {
                button #showcase-restart.control type="button" aria-label="Repetir animación" {
                    (icon("restart"))
                }
                button #showcase-sound.control type="button" aria-label="Sonido"
                    aria-pressed=(showcase.sound_on) hidden[!showcase.mute_visible] {
                    (icon("sound"))
                }
            }
        }
    }
}

fn dish_card(index: usize, dish: &Dish) -> Markup {
    html! {
        article.menu-card data-menu-card=(index) data-viewer-src=(dish.image) data-viewer-alt=(dish.name) {
            div.menu-card-image {
                img src=(dish.image) alt=(dish.name) loading="lazy";
            }
            div.menu-card-body {
                div.menu-card-heading {
                    h3 { (dish.name) }
                    span.price { (dish.price.to_string()) }
                }
                p { (dish.description) }
            }
        }
    }
}

fn menu_preview() -> Markup {
    html! {
        section #menu.section.section-light {
            div.container {
                div.section-intro {
                    (section_header(content::MENU_LABEL, content::MENU_TITLE))
                    p { (content::MENU_INTRO) }
                }
                div.menu-grid {
                    @for (i, dish) in content::MENU_PREVIEW.iter().enumerate() {
                        (dish_card(i, dish))
                    }
                }
                div.centered {
                    button.button.button-primary type="button" data-open=(OverlayKind::FullMenu.id()) {
                        (content::MENU_BUTTON)
                    }
                }
            }
        }
    }
}

fn gallery() -> Markup {
    html! {
        section #gallery.section {
            div.container {
                div.section-intro {
                    (section_header(content::GALLERY_LABEL, content::GALLERY_TITLE))
                }
                div.collage {
                    @for (i, photo) in content::COLLAGE.iter().enumerate() {
                        figure class={ "collage-item collage-item-" (i) } {
                            img src=(photo.src) alt=(photo.alt) loading="lazy";
                        }
                    }
                }
                div.gallery-cta {
                    h3 { (content::GALLERY_CTA_TITLE) }
                    p { (content::GALLERY_CTA_TEXT) }
                    div.hero-actions {
                        a.button.button-primary href="#contact" { (content::GALLERY_CTA_BOOK) }
                        button.button.button-outline type="button" data-open=(OverlayKind::Gallery.id()) {
                            (content::GALLERY_CTA_OPEN)
                        }
                    }
                }
            }
        }
    }
}

fn reservation_form() -> Markup {
    html! {
        form.reservation-form onsubmit="return false" {
            div.form-row {
                label for="name" { "Nombre" }
                input #name type="text" name="name" placeholder="Tu nombre";
            }
            div.form-row {
                label for="email" { "Email" }
                input #email type="email" name="email" placeholder="tu@email.com";
            }
            div.form-grid {
                div.form-row {
                    label for="date" { "Fecha" }
                    input #date type="date" name="date";
                }
                div.form-row {
                    label for="time" { "Hora" }
                    select #time name="time" {
                        option value=(PLACEHOLDER_VALUE) { "Selecciona un horario" }
                        @for service in Service::ALL {
                            optgroup label=(service.label()) {
                                @for slot in service.slots() {
                                    @let slot = slot.to_string();
                                    option value=(slot) { (slot) }
                                }
                            }
                        }
                    }
                }
            }
            div.form-row {
                label for="guests" { "Número de Personas" }
                select #guests name="guests" {
                    option value=(PLACEHOLDER_VALUE) { "Selecciona" }
                    @for size in PartySize::ALL {
                        option value=(size.value()) { (size.label()) }
                    }
                }
            }
            div.form-row {
                label for="message" { "Mensaje (Opcional)" }
                textarea #message name="message" rows="4" placeholder="Información adicional sobre tu reserva" {}
            }
            button.button.button-primary.button-wide type="submit" { "Reserva Ahora" }
        }
    }
}

fn contact() -> Markup {
    html! {
        section #contact.section {
            div.container {
                div.section-intro {
                    (section_header(content::CONTACT_LABEL, content::CONTACT_TITLE))
                    p { (content::CONTACT_INTRO) }
                }
                div.contact-grid {
                    (reservation_form())
                    aside.contact-info {
                        h3 { "Información de Contacto" }
                        ul.contact-list {
                            li { (icon("pin")) div { strong { "Dirección" } p { (content::ADDRESS) } } }
                            li { (icon("phone")) div { strong { "Teléfono" } p { (content::PHONE) } } }
                            li { (icon("mail")) div { strong { "Email" } p { (content::EMAIL) } } }
                        }
                        h3 { "Horario" }
                        dl.hours {
                            @for row in &content::OPENING_HOURS {
                                dt { (row.days) }
                                dd { (row.hours) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer(name: &str, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div {
                    h3.brand { (name) }
                    p { (content::FOOTER_TAGLINE) }
                    div.socials {
                        @for social in &content::SOCIAL_LINKS {
                            a href=(social.href) aria-label=(social.name) { (social.name) }
                        }
                    }
                }
                div {
                    h4 { "Enlaces Rápidos" }
                    nav.footer-links { (nav_links(&content::FOOTER_LINKS, "footer-link")) }
                }
                div {
                    h4 { "Horario" }
                    @for row in &content::OPENING_HOURS {
                        p { (row.days) ": " (row.hours) }
                    }
                }
            }
            p.copyright { "© " (year) " " (name) ". Todos los derechos reservados." }
        }
    }
}

// ============================================================================
// Overlays
// ============================================================================

/// Backdrop + dialog shell shared by the three overlays.
fn overlay(kind: OverlayKind, view: &PageView, class: &str, body: Markup) -> Markup {
    html! {
        div id=(kind.id()) class={ "overlay " (class) } data-overlay role="dialog"
            aria-modal="true" aria-label=(kind.label()) hidden[!view.is_open(kind)] {
            div.overlay-panel {
                button.overlay-close type="button" data-close aria-label=(content::CLOSE_LABEL) {
                    (icon("close"))
                }
                (body)
            }
        }
    }
}

fn menu_section(section: &MenuSection) -> Markup {
    html! {
        div.full-menu-section {
            h3 { (section.title) }
            ul {
                @for item in section.items {
                    li {
                        div {
                            h4 { (item.name) }
                            @if let Some(description) = item.description {
                                p { (description) }
                            }
                        }
                        span.price { (item.price.to_string()) }
                    }
                }
            }
        }
    }
}

fn full_menu_overlay(view: &PageView) -> Markup {
    let body = html! {
        h2.overlay-title { (content::FULL_MENU_TITLE) }
        div.full-menu-grid {
            @for section in &content::FULL_MENU {
                (menu_section(section))
            }
        }
        div.full-menu-drinks {
            h3 { (content::DRINKS_TITLE) }
            div.full-menu-grid {
                @for section in &content::DRINKS {
                    (menu_section(section))
                }
            }
        }
        div.overlay-footer {
            p { (content::FULL_MENU_NOTE) }
            button.button.button-primary type="button" data-close { (content::CLOSE_LABEL) }
        }
    };
    overlay(OverlayKind::FullMenu, view, "overlay-light", body)
}

fn gallery_overlay(view: &PageView) -> Markup {
    let current = view.carousel_index;
    let len = content::CAROUSEL.len();
    let body = html! {
        div.carousel {
            @for (i, slide) in content::CAROUSEL.iter().enumerate() {
                figure.carousel-slide data-index=(i) hidden[i != current] {
                    img src=(slide.photo.src) alt=(slide.photo.alt) loading="lazy";
                    figcaption { (slide.caption) }
                }
            }
            button.carousel-arrow.carousel-prev type="button" data-carousel="prev" aria-label="Anterior" {
                (icon("prev"))
            }
            button.carousel-arrow.carousel-next type="button" data-carousel="next" aria-label="Siguiente" {
                (icon("next"))
            }
            p.carousel-counter { span data-carousel-current { (current + 1) } " / " (len) }
        }
        div.carousel-dots {
            @for i in 0..len {
                button type="button" data-carousel-dot=(i) aria-label={ "Imagen " (i + 1) }
                    aria-current=[(i == current).then_some("true")] {}
            }
        }
    };
    overlay(OverlayKind::Gallery, view, "overlay-dark", body)
}

fn image_viewer(view: &PageView) -> Markup {
    let body = html! {
        figure.viewer {
            img #viewer-image src=[view.viewer_src] alt=[view.viewer_alt];
            figcaption #viewer-caption { @if let Some(alt) = view.viewer_alt { (alt) } }
        }
    };
    overlay(OverlayKind::ImageViewer, view, "overlay-dark", body)
}

// ============================================================================
// Tests
// ============================================================================

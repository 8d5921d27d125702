use actix_web::{
    http::header::{self, HeaderValue},
    web, HttpRequest, HttpResponse, Result,
};
use askama::Template;
use chrono::{Datelike, Local, Utc};
use serde::Deserialize;

use crate::{
    booking::BookingWizard,
    carousel::Carousel,
    catalog::Catalog,
    content::{
        find_promotion, find_team_member, GalleryItem, Hero, Promotion, SeasonalOffer,
        ServiceFamily, Stat, TeamMember, Testimonial, HERO, PROMOTIONS, SEASONAL_OFFER,
        SERVICE_FAMILIES, STATS, TEAM, TESTIMONIALS,
    },
    countdown::time_left,
    gallery::{self, Lightbox, LightboxCommand, ALL_CATEGORY, CATEGORIES, SWIPE_THRESHOLD_PX},
    routes::{booking::BookingView, contact::ContactView},
    session::{session_cookie, session_or_new},
    state::AppState,
    templates::render,
};

/// UI state carried in the page URL.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub categoria: Option<String>,
    pub foto: Option<String>,
    pub membro: Option<String>,
    pub promo: Option<String>,
    pub recensione: Option<String>,
}

impl PageQuery {
    fn index(value: Option<&str>) -> Option<usize> {
        value.and_then(|value| value.trim().parse().ok())
    }
}

/// `/?k=v&...#anchor`; values are catalog ids and need no escaping.
fn page_link(params: &[(&str, &str)], anchor: &str) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        format!("/#{anchor}")
    } else {
        format!("/?{query}#{anchor}")
    }
}

#[derive(Clone, Debug)]
pub(crate) struct CategoryTab {
    pub(crate) label: &'static str,
    pub(crate) count: usize,
    pub(crate) active: bool,
    pub(crate) href: String,
}

#[derive(Clone, Debug)]
pub(crate) struct GalleryCard {
    pub(crate) item: &'static GalleryItem,
    pub(crate) href: String,
}

#[derive(Clone, Debug)]
pub(crate) struct KeyBinding {
    pub(crate) key: &'static str,
    pub(crate) href: String,
}

#[derive(Clone, Debug)]
pub(crate) struct LightboxView {
    pub(crate) item: &'static GalleryItem,
    pub(crate) position: usize,
    pub(crate) total: usize,
    pub(crate) navigable: bool,
    pub(crate) prev_href: String,
    pub(crate) next_href: String,
    pub(crate) close_href: String,
    pub(crate) keys: Vec<KeyBinding>,
}

#[derive(Clone, Debug)]
pub(crate) struct GalleryView {
    pub(crate) tabs: Vec<CategoryTab>,
    pub(crate) cards: Vec<GalleryCard>,
    pub(crate) lightbox: Option<LightboxView>,
    pub(crate) swipe_threshold: i32,
}

impl GalleryView {
    fn build(query: &PageQuery) -> Self {
        let category = gallery::resolve_category(query.categoria.as_deref());
        let items = gallery::filter(category);
        let photo_link = |index: Option<usize>| {
            let index = index.map(|index| index.to_string());
            let mut params = Vec::new();
            if category.id != ALL_CATEGORY {
                params.push(("categoria", category.id));
            }
            if let Some(index) = index.as_deref() {
                params.push(("foto", index));
            }
            page_link(&params, "galleria")
        };

        let tabs = CATEGORIES
            .iter()
            .map(|tab| CategoryTab {
                label: tab.label,
                count: gallery::count(tab),
                active: tab.id == category.id,
                href: if tab.id == ALL_CATEGORY {
                    page_link(&[], "galleria")
                } else {
                    page_link(&[("categoria", tab.id)], "galleria")
                },
            })
            .collect();

        let cards = items
            .iter()
            .enumerate()
            .map(|(index, item)| GalleryCard {
                item: *item,
                href: photo_link(Some(index)),
            })
            .collect();

        let viewer = Lightbox::open(items.len(), PageQuery::index(query.foto.as_deref()));
        let lightbox = viewer.index().map(|index| {
            let keys = LightboxCommand::KEYS
                .into_iter()
                .filter_map(|key| {
                    let command = LightboxCommand::from_key(key)?;
                    let mut peek = viewer;
                    let target = peek.apply(command);
                    Some(KeyBinding {
                        key,
                        href: photo_link(target),
                    })
                })
                .collect();
            LightboxView {
                item: items[index],
                position: index + 1,
                total: items.len(),
                navigable: viewer.can_navigate(),
                prev_href: photo_link(viewer.prev_index()),
                next_href: photo_link(viewer.next_index()),
                close_href: photo_link(None),
                keys,
            }
        });

        Self {
            tabs,
            cards,
            lightbox,
            swipe_threshold: SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TeamView {
    pub(crate) members: &'static [TeamMember],
    pub(crate) selected: Option<&'static TeamMember>,
}

impl TeamView {
    fn build(query: &PageQuery) -> Self {
        Self {
            members: TEAM,
            selected: query.membro.as_deref().and_then(find_team_member),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Slide {
    pub(crate) testimonial: &'static Testimonial,
    pub(crate) active: bool,
    pub(crate) stars: String,
    pub(crate) href: String,
}

#[derive(Clone, Debug)]
pub(crate) struct TestimonialsView {
    pub(crate) slides: Vec<Slide>,
    pub(crate) active: usize,
    pub(crate) prev_href: String,
    pub(crate) next_href: String,
    pub(crate) stats: &'static [Stat],
}

fn review_link(index: usize) -> String {
    page_link(&[("recensione", &index.to_string())], "recensioni")
}

impl TestimonialsView {
    fn build(query: &PageQuery) -> Self {
        let carousel = Carousel::at(
            TESTIMONIALS.len(),
            PageQuery::index(query.recensione.as_deref()).unwrap_or(0),
        );
        let slides = TESTIMONIALS
            .iter()
            .enumerate()
            .map(|(index, testimonial)| Slide {
                testimonial,
                active: index == carousel.index(),
                stars: "★".repeat(usize::from(testimonial.rating)),
                href: review_link(index),
            })
            .collect();

        Self {
            slides,
            active: carousel.index(),
            prev_href: review_link(carousel.prev_index()),
            next_href: review_link(carousel.next_index()),
            stats: STATS,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct CountdownUnit {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) value: String,
}

#[derive(Clone, Debug)]
pub(crate) struct PromoTab {
    pub(crate) promotion: &'static Promotion,
    pub(crate) active: bool,
    pub(crate) href: String,
}

#[derive(Clone, Debug)]
pub(crate) struct PromotionsView {
    pub(crate) offer: &'static SeasonalOffer,
    pub(crate) countdown: Vec<CountdownUnit>,
    pub(crate) expired: bool,
    pub(crate) tabs: Vec<PromoTab>,
    pub(crate) selected: &'static Promotion,
}

impl PromotionsView {
    fn build(state: &AppState, query: &PageQuery) -> Self {
        let left = time_left(&state.config.promo_ends_at, Utc::now());
        let countdown = [
            ("days", "Giorni", left.days),
            ("hours", "Ore", left.hours),
            ("minutes", "Minuti", left.minutes),
            ("seconds", "Secondi", left.seconds),
        ]
        .into_iter()
        .map(|(key, label, value)| CountdownUnit {
            key,
            label,
            value: format!("{value:02}"),
        })
        .collect();

        let selected = find_promotion(query.promo.as_deref());
        let tabs = PROMOTIONS
            .iter()
            .map(|promotion| PromoTab {
                promotion,
                active: promotion.id == selected.id,
                href: page_link(&[("promo", promotion.id)], "promozioni"),
            })
            .collect();

        Self {
            offer: &SEASONAL_OFFER,
            countdown,
            expired: left.expired,
            tabs,
            selected,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct HomeTemplate {
    pub(crate) hero: &'static Hero,
    pub(crate) services: &'static [ServiceFamily],
    pub(crate) gallery: GalleryView,
    pub(crate) team: TeamView,
    pub(crate) testimonials: TestimonialsView,
    pub(crate) booking: BookingView,
    pub(crate) promotions: PromotionsView,
    pub(crate) contact: ContactView,
    pub(crate) focus: Option<&'static str>,
    pub(crate) year: i32,
}

pub(crate) fn home_page(
    state: &AppState,
    query: &PageQuery,
    wizard: &BookingWizard,
    contact: ContactView,
) -> HomeTemplate {
    let catalog = Catalog::today();
    HomeTemplate {
        hero: &HERO,
        services: SERVICE_FAMILIES,
        gallery: GalleryView::build(query),
        team: TeamView::build(query),
        testimonials: TestimonialsView::build(query),
        booking: BookingView::build(wizard, &catalog),
        promotions: PromotionsView::build(state, query),
        contact,
        focus: None,
        year: Local::now().year(),
    }
}

/// Renders the page and issues the wizard cookie when the visitor has none.
pub(crate) fn respond(
    req: &HttpRequest,
    state: &AppState,
    page: HomeTemplate,
    session: &str,
    issued: bool,
) -> Result<HttpResponse> {
    let mut response = render(page);
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    if issued {
        response
            .add_cookie(&session_cookie(req, session, state.wizards.idle()))
            .map_err(actix_web::error::ErrorInternalServerError)?;
    }
    Ok(response)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn home(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let (session, issued) = session_or_new(&req);
    let wizard = state.wizards.snapshot(Some(&session));
    let page = home_page(&state, &query, &wizard, ContactView::new());
    respond(&req, &state, page, &session, issued)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, App};
    use actix_web::test::{call_and_read_body, call_service, init_service, TestRequest};

    use super::*;
    use crate::{routes, session::SESSION_COOKIE, state::test_state};

    fn query(pairs: &[(&str, &str)]) -> PageQuery {
        let mut query = PageQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "categoria" => query.categoria = value,
                "foto" => query.foto = value,
                "membro" => query.membro = value,
                "promo" => query.promo = value,
                "recensione" => query.recensione = value,
                _ => {}
            }
        }
        query
    }

    #[test]
    fn gallery_lightbox_wraps_within_category() {
        let view = GalleryView::build(&query(&[("categoria", "colore"), ("foto", "0")]));

        assert_eq!(view.cards.len(), 3);
        assert!(view.tabs.iter().any(|tab| tab.active && tab.label == "Colore"));
        let lightbox = view.lightbox.unwrap();
        assert_eq!(lightbox.position, 1);
        assert_eq!(lightbox.prev_href, "/?categoria=colore&foto=2#galleria");
        assert_eq!(lightbox.next_href, "/?categoria=colore&foto=1#galleria");
        assert_eq!(lightbox.close_href, "/?categoria=colore#galleria");
        assert!(lightbox
            .keys
            .iter()
            .any(|binding| binding.key == "Escape" && binding.href == lightbox.close_href));
    }

    #[test]
    fn bad_photo_index_keeps_lightbox_closed() {
        assert!(GalleryView::build(&query(&[("foto", "99")])).lightbox.is_none());
        assert!(GalleryView::build(&query(&[("foto", "uno")])).lightbox.is_none());
    }

    #[test]
    fn testimonials_wrap_and_mark_active_slide() {
        let view = TestimonialsView::build(&query(&[("recensione", "0")]));
        assert_eq!(view.active, 0);
        assert_eq!(view.prev_href, "/?recensione=4#recensioni");
        assert_eq!(view.next_href, "/?recensione=1#recensioni");
        assert_eq!(view.slides.iter().filter(|slide| slide.active).count(), 1);
    }

    #[test]
    fn unknown_promotion_selects_the_first() {
        let view = PromotionsView::build(&test_state(), &query(&[("promo", "gratis")]));
        assert_eq!(view.selected.id, PROMOTIONS[0].id);
        assert_eq!(view.countdown.len(), 4);
    }

    #[test]
    fn team_member_opens_by_id() {
        assert_eq!(
            TeamView::build(&query(&[("membro", "marco-bianchi")]))
                .selected
                .map(|member| member.name),
            Some("Marco Bianchi")
        );
        assert!(TeamView::build(&query(&[("membro", "nessuno")])).selected.is_none());
    }

    #[actix_web::test]
    async fn first_visit_sets_wizard_cookie() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes::configure),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE);
        assert!(cookie.is_some_and(|cookie| cookie.http_only() == Some(true)));
    }

    #[actix_web::test]
    async fn page_renders_every_section() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes::configure),
        )
        .await;

        let req = TestRequest::get().uri("/?foto=1").to_request();
        let body = call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        for anchor in [
            "id=\"home\"",
            "id=\"servizi\"",
            "id=\"galleria\"",
            "id=\"team\"",
            "id=\"recensioni\"",
            "id=\"prenota\"",
            "id=\"promozioni\"",
            "id=\"contatti\"",
            "id=\"lightbox\"",
        ] {
            assert!(body.contains(anchor), "missing {anchor}");
        }
    }

    #[actix_web::test]
    async fn health_answers_ok() {
        let app = init_service(App::new().configure(configure)).await;
        let req = TestRequest::get().uri("/health").to_request();
        let body = call_and_read_body(&app, req).await;
        assert_eq!(body, "ok");
    }
}

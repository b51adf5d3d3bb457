use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        banner::{BannerDto, BannerFormDto, BannerType},
        blog::{BlogDto, BlogFormDto, MustVisitInputDto, MustVisitThingDto},
        city::{CityDto, CityFormDto, CityStatusDto, ThingToDoDto, ThingToDoInputDto},
        property::{
            AmenityDto, ImageDto, PropertyDto, PropertyFormDto, PropertyReviewDto,
            PropertyReviewFormDto, PropertyReviewInputDto, RatingDto,
        },
        review::{ReviewDto, ReviewFormDto, ReviewSource},
    },
    server::{
        config::Config,
        controller::{banner, blog, city, health, property, review},
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

const MB: usize = 1024 * 1024;

/// Request body limit for standalone reviews, sized for one profile picture.
const REVIEW_BODY_LIMIT: usize = 3 * MB;
/// Request body limit for properties, cities and banners.
const GALLERY_BODY_LIMIT: usize = 30 * MB;
/// Request body limit for blogs, whose images are allowed to be larger.
const BLOG_BODY_LIMIT: usize = 60 * MB;

#[derive(OpenApi)]
#[openapi(
    info(title = "Rental CMS API"),
    paths(
        health::health,
        property::get_properties,
        property::get_property,
        property::create_property,
        property::update_property,
        property::delete_property,
        property::add_property_review,
        property::edit_property_review,
        property::delete_property_review,
        review::get_reviews,
        review::get_review,
        review::create_review,
        review::update_review,
        review::delete_review,
        city::get_cities,
        city::get_active_cities,
        city::get_city,
        city::create_city,
        city::update_city,
        city::set_city_status,
        banner::get_banners,
        banner::get_banners_by_type,
        banner::get_banner,
        banner::create_banner,
        banner::update_banner,
        banner::delete_banner,
        blog::get_blogs,
        blog::get_blog,
        blog::create_blog,
        blog::update_blog,
        blog::delete_blog,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        AmenityDto,
        ImageDto,
        RatingDto,
        PropertyReviewDto,
        PropertyReviewInputDto,
        PropertyDto,
        PropertyFormDto,
        PropertyReviewFormDto,
        ReviewSource,
        ReviewDto,
        ReviewFormDto,
        ThingToDoDto,
        ThingToDoInputDto,
        CityDto,
        CityFormDto,
        CityStatusDto,
        BannerType,
        BannerDto,
        BannerFormDto,
        MustVisitThingDto,
        MustVisitInputDto,
        BlogDto,
        BlogFormDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "property", description = "Rental properties and their embedded reviews"),
        (name = "review", description = "Standalone guest reviews"),
        (name = "city", description = "Cities and their things to do"),
        (name = "banner", description = "Homepage banners"),
        (name = "blog", description = "City blogs and must-visit places"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every resource group carries its own request body limit since uploads are
/// buffered in memory. CORS allows the configured origin, or any origin when none is
/// configured.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let properties = Router::new()
        .route(
            "/api/properties",
            get(property::get_properties).post(property::create_property),
        )
        .route(
            "/api/properties/{id}",
            get(property::get_property)
                .put(property::update_property)
                .delete(property::delete_property),
        )
        .route(
            "/api/properties/{id}/reviews",
            post(property::add_property_review),
        )
        .route(
            "/api/properties/{id}/reviews/{review_id}",
            put(property::edit_property_review).delete(property::delete_property_review),
        )
        .layer(DefaultBodyLimit::max(GALLERY_BODY_LIMIT));

    let reviews = Router::new()
        .route(
            "/api/reviews",
            get(review::get_reviews).post(review::create_review),
        )
        .route(
            "/api/reviews/{id}",
            get(review::get_review)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .layer(DefaultBodyLimit::max(REVIEW_BODY_LIMIT));

    let cities = Router::new()
        .route("/api/cities", get(city::get_cities).post(city::create_city))
        .route("/api/cities/active", get(city::get_active_cities))
        .route(
            "/api/cities/{id}",
            get(city::get_city).put(city::update_city),
        )
        .route("/api/cities/{id}/status", patch(city::set_city_status))
        .layer(DefaultBodyLimit::max(GALLERY_BODY_LIMIT));

    let banners = Router::new()
        .route(
            "/api/banners",
            get(banner::get_banners).post(banner::create_banner),
        )
        .route("/api/banners/type/{type}", get(banner::get_banners_by_type))
        .route(
            "/api/banners/{id}",
            get(banner::get_banner)
                .put(banner::update_banner)
                .delete(banner::delete_banner),
        )
        .layer(DefaultBodyLimit::max(GALLERY_BODY_LIMIT));

    let blogs = Router::new()
        .route("/api/blogs", get(blog::get_blogs).post(blog::create_blog))
        .route(
            "/api/blogs/{id}",
            get(blog::get_blog)
                .put(blog::update_blog)
                .delete(blog::delete_blog),
        )
        .layer(DefaultBodyLimit::max(BLOG_BODY_LIMIT));

    Ok(Router::new()
        .route("/api/health", get(health::health))
        .merge(properties)
        .merge(reviews)
        .merge(cities)
        .merge(banners)
        .merge(blogs)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(layer.allow_origin(Any));
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: origin.to_string(),
        })?;

    Ok(layer.allow_origin(origin))
}

//! Request payload validation
//!
//! Every rule that fails is reported, joined into one 400 message.

use cstation_chargers::SearchRequest;
use cstation_common::models::{NewReview, NewUser, ReviewUpdate, Station, UserUpdate};
use cstation_common::{validation_error, CStationError};

use crate::handlers::auth::TokenRequest;

const USERNAME_LEN: (usize, usize) = (1, 30);
const PASSWORD_LEN: (usize, usize) = (5, 20);
const MAX_SEARCH_RESULTS: u32 = 100;

/// Collects violations for one payload.
#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.0.push(message.into());
        }
    }

    fn length(&mut self, field: &str, value: &str, (min, max): (usize, usize)) {
        let len = value.chars().count();
        self.check(
            (min..=max).contains(&len),
            format!("{field} must be between {min} and {max} characters"),
        );
    }

    fn non_empty(&mut self, field: &str, value: &str) {
        self.check(!value.trim().is_empty(), format!("{field} must not be empty"));
    }

    fn email(&mut self, value: &str) {
        self.check(
            value.contains('@') && !value.starts_with('@') && !value.ends_with('@'),
            "email must be a valid email address",
        );
    }

    fn finish(self) -> Result<(), CStationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(validation_error(self.0.join("; ")))
        }
    }
}

pub fn validate_token_request(request: &TokenRequest) -> Result<(), CStationError> {
    let mut v = Violations::default();
    v.non_empty("username", &request.username);
    v.non_empty("password", &request.password);
    v.finish()
}

pub fn validate_new_user(user: &NewUser) -> Result<(), CStationError> {
    let mut v = Violations::default();
    v.length("username", &user.username, USERNAME_LEN);
    v.length("password", &user.password, PASSWORD_LEN);
    v.non_empty("firstName", &user.first_name);
    v.non_empty("lastName", &user.last_name);
    v.email(&user.email);
    v.finish()
}

pub fn validate_user_update(update: &UserUpdate) -> Result<(), CStationError> {
    let mut v = Violations::default();
    v.check(!update.is_empty(), "at least one field is required");
    v.check(update.username.is_none(), "username cannot be changed");
    if let Some(password) = &update.password {
        v.length("password", password, PASSWORD_LEN);
    }
    if let Some(first_name) = &update.first_name {
        v.non_empty("firstName", first_name);
    }
    if let Some(last_name) = &update.last_name {
        v.non_empty("lastName", last_name);
    }
    if let Some(email) = &update.email {
        v.email(email);
    }
    v.finish()
}

pub fn validate_station(station: &Station) -> Result<(), CStationError> {
    let mut v = Violations::default();
    v.non_empty("name", &station.name);
    v.check(
        (-90.0..=90.0).contains(&station.lat),
        "lat must be between -90 and 90",
    );
    v.check(
        (-180.0..=180.0).contains(&station.long),
        "long must be between -180 and 180",
    );
    v.check(station.available >= 0, "available must not be negative");
    v.finish()
}

fn review_fields(v: &mut Violations, title: &str, rating: i64) {
    v.non_empty("title", title);
    v.check((1..=5).contains(&rating), "rating must be between 1 and 5");
}

pub fn validate_new_review(review: &NewReview) -> Result<(), CStationError> {
    let mut v = Violations::default();
    review_fields(&mut v, &review.title, review.rating);
    v.finish()
}

pub fn validate_review_update(update: &ReviewUpdate) -> Result<(), CStationError> {
    let mut v = Violations::default();
    review_fields(&mut v, &update.title, update.rating);
    v.finish()
}

pub fn validate_search(request: &SearchRequest) -> Result<(), CStationError> {
    let mut v = Violations::default();
    v.check(
        (-90.0..=90.0).contains(&request.lat),
        "lat must be between -90 and 90",
    );
    v.check(
        (-180.0..=180.0).contains(&request.lng),
        "lng must be between -180 and 180",
    );
    if let Some(max_result) = request.max_result {
        v.check(
            (1..=MAX_SEARCH_RESULTS).contains(&max_result),
            format!("maxResult must be between 1 and {MAX_SEARCH_RESULTS}"),
        );
    }
    v.finish()
}

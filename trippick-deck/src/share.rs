//! Share text for a final recommendation.

use trippick_core::Destination;
use url::form_urlencoded;

/// Kakao Story share endpoint.
pub const KAKAO_STORY_SHARE_URL: &str = "https://story.kakao.com/share";

/// Two-line share message: a headline naming the destination, then its
/// description.
///
/// # Examples
/// ```
/// use trippick_core::NewDestination;
/// use trippick_deck::share_message;
///
/// let jeju = NewDestination {
///     name: "Jeju Island".into(),
///     name_korean: "제주도".into(),
///     description: "에메랄드빛 바다".into(),
///     region: "jeju".into(),
///     category: "자연".into(),
///     image_url: String::new(),
///     rating: 4.8,
///     tags: Vec::new(),
///     latitude: None,
///     longitude: None,
/// }
/// .into_destination(1);
/// assert_eq!(share_message(&jeju), "TripPick에서 발견한 여행지: 제주도\n에메랄드빛 바다");
/// ```
#[must_use]
pub fn share_message(destination: &Destination) -> String {
    format!(
        "TripPick에서 발견한 여행지: {}\n{}",
        destination.name_korean, destination.description
    )
}

/// Kakao Story link sharing `page_url` with the share message.
///
/// Parameters use `application/x-www-form-urlencoded` escaping, so spaces
/// become `+` rather than `%20`. Kakao decodes both forms identically.
#[must_use]
pub fn kakao_story_url(page_url: &str, destination: &Destination) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("url", page_url)
        .append_pair("text", &share_message(destination))
        .finish();
    format!("{KAKAO_STORY_SHARE_URL}?{query}")
}

/// Clipboard text for platforms without a share link: the message, a blank
/// line, then the page address.
#[must_use]
pub fn clipboard_text(page_url: &str, destination: &Destination) -> String {
    format!("{}\n\n{page_url}", share_message(destination))
}

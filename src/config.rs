//! Site configuration: fixed contact details, map geometry, and the
//! outward-facing link construction.

/// Marker coordinate for the apartment (Bole district, Addis Ababa).
pub const MAP_LNG: f64 = 38.7987;
pub const MAP_LAT: f64 = 9.0054;

/// Half-width of the embedded map's bounding box, in degrees.
const MAP_BBOX_SPAN: f64 = 0.01;

pub const CONTACT_EMAIL: &str = "stay@balhir.com";
pub const CONTACT_PHONE: &str = "+251 911 123 456";
pub const CONTACT_PHONE_LINK: &str = "tel:+251911123456";
pub const ADDRESS: &str = "Bole, Addis Ababa, Ethiopia";
pub const CHECK_IN_HOURS: &str = "2:00 PM - 10:00 PM";

/// Static OpenStreetMap embed around the marker. Used whenever no map
/// token is supplied.
pub fn osm_embed_url() -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}%2C{}%2C{}%2C{}&layer=mapnik&marker={}%2C{}",
        MAP_LNG - MAP_BBOX_SPAN,
        MAP_LAT - MAP_BBOX_SPAN,
        MAP_LNG + MAP_BBOX_SPAN,
        MAP_LAT + MAP_BBOX_SPAN,
        MAP_LAT,
        MAP_LNG,
    )
}

/// Richer interactive embed, initialized client-side from a user-supplied
/// access token. The token is passed through verbatim; a bad one simply
/// renders an empty panel and the caller falls back to the static embed.
pub fn mapbox_embed_url(token: &str) -> String {
    format!(
        "https://api.mapbox.com/styles/v1/mapbox/dark-v11.html?title=false&access_token={}#14/{}/{}",
        urlencoding::encode(token),
        MAP_LAT,
        MAP_LNG,
    )
}

/// `mailto:` link with a prefilled booking subject.
pub fn booking_mailto() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode("Booking inquiry - Balhir Apartment"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osm_embed_centers_the_marker() {
        let url = osm_embed_url();
        assert!(url.contains("marker=9.0054%2C38.7987"));
        assert!(url.contains("bbox=38.7887%2C8.9954%2C38.8087%2C9.0154"));
    }

    #[test]
    fn mapbox_embed_escapes_the_token() {
        let url = mapbox_embed_url("pk.abc/123 x");
        assert!(url.contains("access_token=pk.abc%2F123%20x"));
        assert!(url.ends_with("#14/9.0054/38.7987"));
    }

    #[test]
    fn mailto_subject_is_encoded() {
        let link = booking_mailto();
        assert!(link.starts_with("mailto:stay@balhir.com?subject="));
        assert!(link.contains("Booking%20inquiry"));
    }
}

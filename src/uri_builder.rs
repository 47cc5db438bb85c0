use crate::error::{BingMapsError, Result};
use crate::types::{MapStyle, RouteEndpoint};
use std::fmt;

/// Fluent builder for `bingmaps:` launch URIs.
///
/// Every setter appends one `key=value` term to the buffer. Terms are never
/// removed or deduplicated, so calling a setter twice repeats its key.
///
/// Numbers go through `f64`'s `Display`, which always uses `.` as decimal
/// point and never groups digits. Non-finite values are not rejected and come
/// out as `inf`, `-inf` or `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct BingMapsUri {
    value: String,
}

impl BingMapsUri {
    pub const SCHEME: &'static str = "bingmaps:?";

    #[must_use]
    pub fn new() -> Self {
        BingMapsUri {
            value: Self::SCHEME.to_string(),
        }
    }

    /// Center point of the map view.
    pub fn set_center_point(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.push_param("cp", format_args!("{latitude}~{longitude}"))
    }

    /// Rectangular area to show.
    pub fn set_bounding_box(
        &mut self,
        south_latitude: f64,
        north_latitude: f64,
        west_longitude: f64,
        east_longitude: f64,
    ) -> &mut Self {
        self.push_param(
            "bb",
            format_args!(
                "{south_latitude}_{north_latitude}~{west_longitude}_{east_longitude}"
            ),
        )
    }

    /// Location, landmark or place to search for and display.
    ///
    /// The address is appended verbatim, it must already be URI-safe.
    pub fn where_address(&mut self, address: &str) -> &mut Self {
        self.push_param("where", address)
    }

    /// Search term for a local business or category of businesses.
    ///
    /// Appended verbatim, like [`BingMapsUri::where_address`].
    pub fn query(&mut self, term: &str) -> &mut Self {
        self.push_param("q", term)
    }

    /// Zoom level of the map view, 1 being zoomed all the way out.
    ///
    /// # Errors
    /// Returns `BingMapsError::ZoomOutOfRange` if `zoom_level` is not in
    /// `(0, 20]`. The buffer is left untouched in that case.
    pub fn set_zoom_level(&mut self, zoom_level: f64) -> Result<&mut Self> {
        // Written so that NaN fails the check too
        if !(zoom_level > 0.0 && zoom_level <= 20.0) {
            return Err(BingMapsError::ZoomOutOfRange(zoom_level));
        }

        Ok(self.push_param("lvl", zoom_level))
    }

    pub fn set_map_style(&mut self, style: MapStyle) -> &mut Self {
        self.push_param("sty", style.code())
    }

    /// Whether traffic information is included on the map.
    pub fn show_traffic(&mut self, show: bool) -> &mut Self {
        self.push_param("trfc", if show { "1" } else { "0" })
    }

    /// Start and end of a route to draw on the map.
    ///
    /// Either side accepts a coordinate pair or an address:
    /// ```
    /// use bingmaps_uri::uri_builder::BingMapsUri;
    ///
    /// let uri = BingMapsUri::new()
    ///     .show_route((47.6, -122.3), "Seattle, WA")
    ///     .build();
    /// assert_eq!(uri, "bingmaps:?rtp=pos.47.6_-122.3~adr.Seattle, WA");
    /// ```
    pub fn show_route(
        &mut self,
        from: impl Into<RouteEndpoint>,
        to: impl Into<RouteEndpoint>,
    ) -> &mut Self {
        let (from, to) = (from.into(), to.into());
        self.push_param("rtp", format_args!("{from}~{to}"))
    }

    /// Returns true while no parameter has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.len() == Self::SCHEME.len()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn build(&self) -> String {
        self.value.clone()
    }

    fn push_param(&mut self, key: &str, value: impl fmt::Display) -> &mut Self {
        if self.value.len() > Self::SCHEME.len() {
            self.value.push('&');
        }
        self.value.push_str(key);
        self.value.push('=');
        self.value.push_str(&value.to_string());
        self
    }
}

impl Default for BingMapsUri {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BingMapsUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<BingMapsUri> for String {
    fn from(uri: BingMapsUri) -> Self {
        uri.value
    }
}

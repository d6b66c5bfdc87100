//!
//! Read-only view of an incoming HTTP request
//!
//! Implement [`RequestView`] for your framework's request type to plug it into the verifier.
//! Implementations for the [`http`] crate's request types are provided behind the `http` feature.
//!

/// The parts of a request the verifier reads
pub trait RequestView {
    /// HTTP method as sent by the client (e.g. `POST`)
    fn method(&self) -> &str;

    /// Request path without the query
    fn path(&self) -> &str;

    /// Query string without the leading `?`
    ///
    /// Empty if the request has no query
    fn query(&self) -> &str;

    /// All values of the header, in the order they were transmitted
    ///
    /// The lookup is case-insensitive
    fn header<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str>;
}

impl<T> RequestView for &T
where
    T: RequestView + ?Sized,
{
    #[inline]
    fn method(&self) -> &str {
        (**self).method()
    }

    #[inline]
    fn path(&self) -> &str {
        (**self).path()
    }

    #[inline]
    fn query(&self) -> &str {
        (**self).query()
    }

    #[inline]
    fn header<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        (**self).header(name)
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::RequestView;
    use http::{request::Parts, HeaderMap, Request, Uri};

    #[inline]
    fn header_values<'a>(headers: &'a HeaderMap, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        headers
            .get_all(name)
            .iter()
            .filter_map(|value| match value.to_str() {
                Ok(value) => Some(value),
                Err(error) => {
                    debug!(?error, "skipping non-textual header value");
                    None
                }
            })
    }

    #[inline]
    fn query(uri: &Uri) -> &str {
        uri.query().unwrap_or_default()
    }

    impl<B> RequestView for Request<B> {
        fn method(&self) -> &str {
            Request::method(self).as_str()
        }

        fn path(&self) -> &str {
            self.uri().path()
        }

        fn query(&self) -> &str {
            query(self.uri())
        }

        fn header<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
            header_values(self.headers(), name)
        }
    }

    impl RequestView for Parts {
        fn method(&self) -> &str {
            self.method.as_str()
        }

        fn path(&self) -> &str {
            self.uri.path()
        }

        fn query(&self) -> &str {
            query(&self.uri)
        }

        fn header<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
            header_values(&self.headers, name)
        }
    }
}

#[cfg(all(test, feature = "http"))]
mod test {
    use super::RequestView;
    use http::{Method, Request, Uri};

    fn request() -> Request<()> {
        Request::builder()
            .method(Method::POST)
            .uri(Uri::from_static("/foo?param=value&pet=dog"))
            .header("Host", "example.com")
            .header("X-Forwarded-For", "192.0.2.1")
            .header("X-Forwarded-For", "198.51.100.7")
            .body(())
            .unwrap()
    }

    #[test]
    fn request_line() {
        let request = request();

        assert_eq!(RequestView::method(&request), "POST");
        assert_eq!(RequestView::path(&request), "/foo");
        assert_eq!(RequestView::query(&request), "param=value&pet=dog");
    }

    #[test]
    fn missing_query_is_empty() {
        let request = Request::get("/inbox").body(()).unwrap();
        assert_eq!(RequestView::query(&request), "");
    }

    #[test]
    fn header_lookup_is_case_insensitive_and_ordered() {
        let request = request();

        assert_eq!(request.header("HOST").collect::<Vec<_>>(), ["example.com"]);
        assert_eq!(
            request.header("x-forwarded-for").collect::<Vec<_>>(),
            ["192.0.2.1", "198.51.100.7"]
        );
        assert_eq!(request.header("digest").count(), 0);
    }

    #[test]
    fn parts_match_request() {
        let (parts, ()) = request().into_parts();

        assert_eq!(RequestView::method(&parts), "POST");
        assert_eq!(RequestView::path(&parts), "/foo");
        assert_eq!(parts.header("Host").collect::<Vec<_>>(), ["example.com"]);
    }
}

// src/crawl/normalize.rs

use crate::anchor::Anchor;

/// Rewrites a raw href into the absolute, slash-terminated form the crawl
/// keys on. Protocol-relative hrefs (`//cdn.example.com`) get the scheme,
/// root-relative hrefs (`/about`) get scheme and host, everything else is
/// taken as already absolute. The trailing slash is appended no matter
/// what the href ends in, so `/about?x=1` becomes `scheme://host/about?x=1/`;
/// equality and the rendered XML both ride on that literal form.
///
/// No validation happens here. A href that is neither relative nor a real
/// URL flows through unchanged and gets dropped later, at the domain gate
/// or by the fetcher.
pub fn canonicalize(anchor: &Anchor, scheme: &str, host: &str) -> Anchor {
    let mut href = if anchor.href.starts_with("//") {
        format!("{}:{}", scheme, anchor.href)
    } else if anchor.href.starts_with('/') {
        format!("{}://{}{}", scheme, host, anchor.href)
    } else {
        anchor.href.clone()
    };

    if !href.ends_with('/') {
        href.push('/');
    }

    Anchor::new(href, anchor.text.clone())
}

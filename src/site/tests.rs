use super::*;

fn site() -> TargetSite {
    TargetSite::new("casinos.com", &[]).unwrap()
}

#[test]
fn test_new_accepts_apex_and_www() {
    let site = site();
    assert!(site.hosts().contains("casinos.com"));
    assert!(site.hosts().contains("www.casinos.com"));
    assert_eq!(site.base().as_str(), "https://www.casinos.com/");
}

#[test]
fn test_new_strips_www_prefix_from_apex() {
    let site = TargetSite::new("www.casinos.com", &[]).unwrap();
    assert!(site.hosts().contains("casinos.com"));
    assert!(site.hosts().contains("www.casinos.com"));
}

#[test]
fn test_new_rejects_unusable_apex() {
    assert!(TargetSite::new("", &[]).is_err());
    assert!(TargetSite::new("localhost", &[]).is_err());
}

#[test]
fn test_new_accepts_extra_hosts() {
    let site = TargetSite::new("casinos.com", &["Promo.Casinos.com".to_string()]).unwrap();
    assert!(site.hosts().contains("promo.casinos.com"));
}

#[test]
fn test_normalize_equivalent_forms() {
    let site = site();
    let expected = "https://www.casinos.com/us/slots";
    assert_eq!(site.normalize("us/slots").unwrap().as_str(), expected);
    assert_eq!(site.normalize("/us/slots").unwrap().as_str(), expected);
    assert_eq!(
        site.normalize("https://www.casinos.com/us/slots").unwrap().as_str(),
        expected
    );
}

#[test]
fn test_normalize_www_prefix_without_scheme() {
    let site = site();
    assert_eq!(
        site.normalize("www.casinos.com/us/poker").unwrap().as_str(),
        "https://www.casinos.com/us/poker"
    );
}

#[test]
fn test_normalize_apex_host_is_kept() {
    let site = site();
    assert_eq!(
        site.normalize("https://casinos.com/us/slots").unwrap().as_str(),
        "https://casinos.com/us/slots"
    );
}

#[test]
fn test_normalize_host_is_case_insensitive() {
    let site = site();
    assert_eq!(
        site.normalize("https://WWW.Casinos.COM/us/slots").unwrap().as_str(),
        "https://www.casinos.com/us/slots"
    );
}

#[test]
fn test_normalize_forces_https() {
    let site = site();
    assert_eq!(
        site.normalize("http://www.casinos.com/us/slots").unwrap().as_str(),
        "https://www.casinos.com/us/slots"
    );
}

#[test]
fn test_normalize_preserves_query_drops_fragment() {
    let site = site();
    assert_eq!(
        site.normalize("https://www.casinos.com/us/slots?page=2#top")
            .unwrap()
            .as_str(),
        "https://www.casinos.com/us/slots?page=2"
    );
}

#[test]
fn test_normalize_bare_host_gets_root_path() {
    let site = site();
    assert_eq!(
        site.normalize("https://www.casinos.com").unwrap().as_str(),
        "https://www.casinos.com/"
    );
}

#[test]
fn test_normalize_rejects_foreign_host() {
    let site = site();
    assert!(matches!(
        site.normalize("https://evil.com/x"),
        Err(NormalizeError::ForeignHost(_))
    ));
    assert!(matches!(
        site.normalize("www.evil.com/x"),
        Err(NormalizeError::ForeignHost(_))
    ));
}

#[test]
fn test_normalize_rejects_explicit_port() {
    let site = site();
    assert!(matches!(
        site.normalize("https://www.casinos.com:8080/x"),
        Err(NormalizeError::ForeignHost(_))
    ));
    // The scheme-default port is not a distinct origin.
    assert_eq!(
        site.normalize("https://www.casinos.com:443/x").unwrap().as_str(),
        "https://www.casinos.com/x"
    );
}

#[test]
fn test_normalize_rejects_empty() {
    let site = site();
    assert!(matches!(
        site.normalize("   "),
        Err(NormalizeError::Unparsable(_))
    ));
}

#[test]
fn test_is_internal_matches_host_set() {
    let site = site();
    let internal = Url::parse("https://CASINOS.com/about").unwrap();
    let external = Url::parse("https://partner.example.com/offer").unwrap();
    assert!(site.is_internal(&internal));
    assert!(!site.is_internal(&external));
}

#[test]
fn test_is_internal_ported_url_is_external() {
    let site = site();
    let ported = Url::parse("https://www.casinos.com:8080/x").unwrap();
    assert!(!site.is_internal(&ported));
    let default_port = Url::parse("https://www.casinos.com:443/x").unwrap();
    assert!(site.is_internal(&default_port));
}

#[test]
fn test_is_internal_extra_host() {
    let site = TargetSite::new("casinos.com", &["promo.casinos.com".to_string()]).unwrap();
    let url = Url::parse("https://promo.casinos.com/deal").unwrap();
    assert!(site.is_internal(&url));
}

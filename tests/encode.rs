use rstest::rstest;
use semver_order::config::{MAX_BUILD_WORD, MAX_PRERELEASE_NUMBER, MAX_PRERELEASE_WORD};
use semver_order::{DecodedPrerelease, EncodeError, decode_prerelease, encode};

#[rstest]
#[case("1.2.3")]
#[case("0.0.0")]
#[case("123.456.789")]
fn plain_release_encodes_to_sentinels(#[case] raw: &str) {
    let result = encode(raw).unwrap();

    assert_eq!(result.prefix, raw);
    assert_eq!(result.prerelease_word, MAX_PRERELEASE_WORD);
    assert_eq!(result.prerelease_number, MAX_PRERELEASE_NUMBER);
    assert_eq!(result.build, MAX_BUILD_WORD);
}

#[test]
fn leading_v_has_no_effect() {
    assert_eq!(encode("v1.2.3").unwrap(), encode("1.2.3").unwrap());
    assert_eq!(
        encode("v1.2.3-rc4+sha").unwrap(),
        encode("1.2.3-rc4+sha").unwrap()
    );
}

#[test]
fn numbered_prereleases_order_numerically() {
    let beta2 = encode("1.0.0-beta2").unwrap();
    let beta10 = encode("1.0.0-beta10").unwrap();

    assert_eq!(beta2.prerelease_word, "beta");
    assert_eq!(beta10.prerelease_word, "beta");
    assert_eq!(beta2.prerelease_number, 2);
    assert_eq!(beta10.prerelease_number, 10);
    assert!(beta2 < beta10);
}

#[test]
fn build_longer_than_column_keeps_first_sixty_characters() {
    let build: String = ('a'..='z').cycle().take(75).collect();
    let result = encode(&format!("2.0.0+{build}")).unwrap();

    assert_eq!(result.build, &build[..60]);
}

#[test]
fn decode_prerelease_is_reachable_from_crate_root() {
    assert_eq!(
        decode_prerelease(Some("rc3")),
        DecodedPrerelease {
            word: "rc".to_string(),
            number: Some(3),
        }
    );
}

#[rstest]
#[case("not-a-version")]
#[case("1.2")]
#[case("1.2.3.4")]
#[case("version1.2.3")]
fn malformed_version_fails_without_result(#[case] raw: &str) {
    let err = encode(raw).unwrap_err();

    assert!(matches!(err, EncodeError::MalformedVersion { .. }));
    assert!(err.to_string().starts_with("Malformed version"));
    assert!(std::error::Error::source(&err).is_some());
}

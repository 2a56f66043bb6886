//! End-to-end property: tags derived from a stack name, re-parsed from the
//! applied tag set, reproduce the same identity and the same tag set.

use cfn_retag_core::{derive_tags, FunctionMap, StackIdentity, Tag};

fn statics() -> Vec<Tag> {
    vec![Tag::new("Pillar", "hs"), Tag::new("Domain", "identity")]
}

#[test]
fn derived_tags_roundtrip_through_reparse() {
    let map = FunctionMap::builtin();
    for name in [
        "bi--unq-user-sess-visits--prod",
        "inventory--matcher-ingest--staging",
        "inventory--matching-batch--prod",
        "corebase",
    ] {
        let identity: StackIdentity = name.parse().unwrap();
        let tags = derive_tags(&identity, &map, &statics());

        let reparsed = StackIdentity::from_tags(&tags).unwrap();
        assert_eq!(reparsed.team, identity.team);
        assert_eq!(reparsed.environment, identity.environment);
        // The applied function tag is canonical; re-deriving from it must be
        // a fixed point.
        assert_eq!(reparsed.function, map.resolve(&identity.function));
        assert_eq!(derive_tags(&reparsed, &map, &statics()), tags);
    }
}

use proptest::prelude::*;

use super::*;

fn syllables(text: &str) -> Vec<Syllable> {
    parse(text)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Syllable(s) => Some(s),
            Segment::Other(_) => None,
        })
        .collect()
}

fn single(text: &str) -> Syllable {
    let mut syls = syllables(text);
    assert_eq!(syls.len(), 1, "expected one syllable in {text}: {syls:?}");
    syls.remove(0)
}

#[test]
fn test_leader_pair_onset() {
    let s = single("หมอก");
    assert_eq!(s.onset, "หม");
    assert_eq!(s.nucleus, Nucleus::Written("-อ"));
    assert_eq!(s.coda, Some('ก'));
    assert_eq!(s.lead, None);
}

#[test]
fn test_lead_vowel_pattern() {
    let s = single("เดือน");
    assert_eq!(s.lead, Some('เ'));
    assert_eq!(s.onset, "ด");
    assert_eq!(s.nucleus, Nucleus::Written("เ-ือ"));
    assert_eq!(s.coda, Some('น'));
    assert_eq!(s.rhyme, "ือน");
}

#[test]
fn test_glide_is_open() {
    let s = single("แมว");
    assert_eq!(s.nucleus, Nucleus::Written("แ-ว"));
    assert_eq!(s.coda, None);

    let s = single("ไทย");
    assert_eq!(s.nucleus, Nucleus::Written("ไ-ย"));
}

#[test]
fn test_cluster_needs_vowel() {
    // กร with a vowel is a cluster; bare it is onset + final
    let s = single("ครับ");
    assert_eq!(s.onset, "คร");
    let s = single("กร");
    assert_eq!(s.onset, "ก");
    assert_eq!(s.nucleus, Nucleus::InherentO);
    assert_eq!(s.coda, Some('ร'));
}

#[test]
fn test_inherent_vowels() {
    let syls = syllables("นพพร");
    assert_eq!(syls.len(), 2);
    assert_eq!(syls[0].nucleus, Nucleus::InherentO);
    assert_eq!(syls[0].coda, Some('พ'));
    assert_eq!(syls[1].onset, "พ");
    assert_eq!(syls[1].coda, Some('ร'));

    let syls = syllables("สวัสดี");
    assert_eq!(syls.len(), 3);
    assert_eq!(syls[0].nucleus, Nucleus::InherentA);
    assert_eq!(syls[0].spelled(), "สะ");
}

#[test]
fn test_double_ro() {
    let s = single("กรร");
    assert_eq!(s.nucleus, Nucleus::Written("-รร"));
    assert_eq!(s.coda, None);
    assert_eq!(s.effective_coda(), Some('น'));

    let s = single("กรรม");
    assert_eq!(s.coda, Some('ม'));
    assert_eq!(s.effective_coda(), Some('ม'));
}

#[test]
fn test_silent_letters() {
    let s = single("จันทร์");
    assert_eq!(s.coda, Some('น'));
    assert_eq!(s.silent, "ทร์");
    assert_eq!(s.spelled(), "จัน");

    let s = single("ธรรพ์");
    assert_eq!(s.coda, None);
    assert_eq!(s.silent, "พ์");
    assert_eq!(s.effective_coda(), Some('น'));
}

#[test]
fn test_tone_mark_kept_in_rhyme() {
    let s = single("ฝ้าย");
    assert_eq!(s.tone, Some('้'));
    assert_eq!(s.nucleus, Nucleus::Written("-าย"));
    assert_eq!(s.rhyme, "้าย");
    assert_eq!(s.respell("ข"), "ข้าย");
}

#[test]
fn test_tone_mark_blocks_final() {
    // น้ำ carries a tone, so น opens the next syllable
    let syls = syllables("ตาน้ำ");
    assert_eq!(syls.len(), 2);
    assert_eq!(syls[0].coda, None);
    assert_eq!(syls[1].text(), "น้ำ");
}

#[test]
fn test_vocalic_onset() {
    let syls = syllables("ฤดู");
    assert_eq!(syls.len(), 2);
    assert_eq!(syls[0].nucleus, Nucleus::Vocalic);

    let s = single("กฤษ");
    assert_eq!(s.nucleus, Nucleus::Written("-ฤ"));
    assert_eq!(s.coda, Some('ษ'));
}

fn count(text: &str) -> usize {
    parse(text).iter().filter_map(Segment::as_syllable).count()
}

#[test]
fn test_syllable_counts() {
    assert_eq!(count("นาริน"), 2);
    assert_eq!(count("แสงดีนะ"), 3);
    assert_eq!(count("สวัสดีครับ"), 4);
    assert_eq!(count("ตากใบ"), 2);
    assert_eq!(count(""), 0);
    assert_eq!(count("abc"), 0);
}

#[test]
fn test_pass_through_segments() {
    let segs = parse("แมว cat");
    assert_eq!(segs.len(), 2);
    assert!(segs[0].as_syllable().is_some());
    assert_eq!(segs[1], Segment::Other(" cat".into()));

    // a lead vowel with nothing to lead
    let segs = parse("เ1");
    assert_eq!(segs, vec![Segment::Other("เ1".into())]);
}

fn thai_or_ascii() -> impl Strategy<Value = String> {
    let chars = prop_oneof![
        8 => (0x0E01u32..=0x0E4Eu32).prop_map(|c| char::from_u32(c).unwrap_or('ก')),
        1 => prop::sample::select(vec!['a', 'z', ' ', '.', '1']),
    ];
    prop::collection::vec(chars, 0..24).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_parse_preserves_text(text in thai_or_ascii()) {
        let joined: String = parse(&text).iter().map(Segment::text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_every_syllable_has_an_onset(text in thai_or_ascii()) {
        for seg in parse(&text) {
            if let Segment::Syllable(s) = seg {
                prop_assert!(!s.onset.is_empty());
            }
        }
    }
}

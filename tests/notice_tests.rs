use adminportal::state::notice::Notice;

#[test]
fn test_notice_shows_and_expires() {
    let mut notice = Notice::default();
    assert_eq!(notice.text(), None);

    let serial = notice.show("Atualizado: Acme");
    assert_eq!(notice.text(), Some("Atualizado: Acme"));

    assert!(notice.expire(serial));
    assert_eq!(notice.text(), None);
    assert!(!notice.expire(serial));
}

#[test]
fn test_earlier_timer_does_not_hide_newer_notice() {
    let mut notice = Notice::default();
    let first = notice.show("Atualizado: Acme");
    let second = notice.show("Atualizado: Globex");
    assert_ne!(first, second);

    assert!(!notice.expire(first));
    assert_eq!(notice.text(), Some("Atualizado: Globex"));

    assert!(notice.expire(second));
    assert_eq!(notice.text(), None);
}

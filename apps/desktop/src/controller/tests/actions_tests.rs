use super::*;

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(parse_action("   "), Ok(None));
}

#[test]
fn parses_navigation_actions() {
    assert_eq!(
        parse_action("category food"),
        Ok(Some(UserAction::Category(CategoryId::from("food"))))
    );
    assert_eq!(
        parse_action("  SHOP   s1 "),
        Ok(Some(UserAction::Shop(ShopId::from("s1"))))
    );
    assert_eq!(parse_action("back"), Ok(Some(UserAction::Back)));
    assert_eq!(parse_action("exit"), Ok(Some(UserAction::Quit)));
}

#[test]
fn offer_edits_keep_the_remaining_text() {
    assert_eq!(
        parse_action("offer-name o1 Pizza de la casa"),
        Ok(Some(UserAction::OfferName(
            OfferId::from("o1"),
            "Pizza de la casa".to_string()
        )))
    );
    assert_eq!(
        parse_action("offer-price o1 750"),
        Ok(Some(UserAction::OfferPrice(
            OfferId::from("o1"),
            "750".to_string()
        )))
    );
    assert_eq!(
        parse_action("offer-image o2 ./fotos/fugazzeta.jpg"),
        Ok(Some(UserAction::OfferImage(
            OfferId::from("o2"),
            PathBuf::from("./fotos/fugazzeta.jpg")
        )))
    );
}

#[test]
fn password_may_be_empty() {
    assert_eq!(
        parse_action("password"),
        Ok(Some(UserAction::Password(String::new())))
    );
}

#[test]
fn reports_missing_arguments_and_unknown_verbs() {
    assert_eq!(
        parse_action("category"),
        Err(ActionParseError::MissingArgument {
            action: "category",
            argument: "id"
        })
    );
    assert_eq!(
        parse_action("offer-price o1"),
        Err(ActionParseError::MissingArgument {
            action: "offer-price",
            argument: "amount"
        })
    );
    assert_eq!(
        parse_action("delete o1"),
        Err(ActionParseError::Unknown("delete".to_string()))
    );
}

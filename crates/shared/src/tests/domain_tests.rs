use super::*;

#[test]
fn parses_plain_and_decimal_prices() {
    assert_eq!(Price::parse("750").expect("integer"), Price::from_units(750));
    assert_eq!(
        Price::parse(" 1500.50 ").expect("decimal").amount(),
        Decimal::new(15005, 1)
    );
    assert_eq!(Price::parse("0").expect("zero"), Price::ZERO);
}

#[test]
fn rejects_prices_that_are_not_non_negative_numbers() {
    assert_eq!(Price::parse(""), Err(PriceError::Empty));
    assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    assert!(matches!(Price::parse("abc"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("NaN"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("12,50"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("-3"), Err(PriceError::Negative(_))));
    assert!(matches!(Price::parse("1e3"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("1_000"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("+5"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("1.2.3"), Err(PriceError::NotNumeric(_))));
    assert!(matches!(Price::parse("."), Err(PriceError::NotNumeric(_))));
}

#[test]
fn rejects_prices_that_would_lose_precision() {
    let tiny = format!("0.{}1", "0".repeat(28));
    assert!(matches!(Price::parse(&tiny), Err(PriceError::NotNumeric(_))));
    assert!(Price::parse("0.0000000000000000000000000001").is_ok());
}

#[test]
fn negative_zero_is_accepted_as_zero() {
    let price = Price::parse("-0").expect("negative zero");
    assert!(price.amount().is_zero());
}

#[test]
fn localizes_with_argentine_grouping() {
    assert_eq!(Price::from_units(500).localized(), "500");
    assert_eq!(Price::from_units(1500).localized(), "1.500");
    assert_eq!(Price::from_units(1_234_567).localized(), "1.234.567");
    assert_eq!(Price::parse("1500.50").expect("price").localized(), "1.500,5");
    assert_eq!(Price::from_units(2500).to_string(), "$ 2.500");
}

#[test]
fn deserializing_a_negative_price_fails() {
    assert!(serde_json::from_str::<Price>("-10").is_err());
    let price: Price = serde_json::from_str("500").expect("numeric price");
    assert_eq!(price, Price::from_units(500));
    let err = serde_json::from_str::<Offer>(
        r#"{"id":"o1","name":"Muzzarella","price":-1,"image":"data:image/png;base64,AA"}"#,
    )
    .expect_err("negative offer price");
    assert!(err.to_string().contains("negative"));
}

#[test]
fn data_uri_reports_its_mime_type() {
    let image = EmbeddedImage::data_uri("image/png", "iVBORw0KGgo=");
    assert!(image.is_data_uri());
    assert_eq!(image.mime_type(), Some("image/png"));
    assert_eq!(image.as_str(), "data:image/png;base64,iVBORw0KGgo=");

    let remote = EmbeddedImage::new("https://example.com/banner.jpg");
    assert!(!remote.is_data_uri());
    assert_eq!(remote.mime_type(), None);
}

#[test]
fn finds_offers_by_id() {
    let mut shop = Shop {
        id: ShopId::from("s1"),
        name: "La Esquina".into(),
        category: CategoryId::from("food"),
        address: "Av. Siempreviva 742".into(),
        specialty: "Pizzas".into(),
        rating: 4.5,
        banner_image: EmbeddedImage::default(),
        offers: vec![Offer {
            id: OfferId::from("o1"),
            name: "Muzzarella".into(),
            price: Price::from_units(500),
            image: EmbeddedImage::default(),
        }],
        map_url: Url::parse("https://maps.example.com/?q=s1").expect("url"),
    };

    assert!(shop.offer(&OfferId::from("o1")).is_some());
    assert!(shop.offer(&OfferId::from("missing")).is_none());
    shop.offer_mut(&OfferId::from("o1")).expect("offer").name = "Fugazzeta".into();
    assert_eq!(shop.offers[0].name, "Fugazzeta");
}

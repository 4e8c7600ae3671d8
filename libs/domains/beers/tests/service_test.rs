//! Service tests against the in-memory repository
//!
//! Cover the stock walk-through end to end and the behaviour of
//! concurrent stock movements on the same beer.

use domain_beers::*;
use futures::future::join_all;

fn create_input(name: &str, max: i32, quantity: i32) -> CreateBeer {
    CreateBeer {
        name: Some(name.to_string()),
        brand: Some("Ambev".to_string()),
        max: Some(max),
        quantity: Some(quantity),
        beer_type: Some(BeerType::Lager),
    }
}

fn service() -> BeerService<InMemoryBeerRepository> {
    BeerService::new(InMemoryBeerRepository::new())
}

#[tokio::test]
async fn test_stock_walkthrough() {
    let service = service();
    let brahma = service.create(create_input("Brahma", 50, 10)).await.unwrap();

    let beer = service
        .increment(brahma.id, QuantityUpdate::new(10))
        .await
        .unwrap();
    assert_eq!(beer.quantity, 20);

    let err = service
        .increment(brahma.id, QuantityUpdate::new(40))
        .await
        .unwrap_err();
    assert!(matches!(err, BeerError::StockExceeded { max: 50, .. }));
    assert_eq!(service.find_by_id(brahma.id).await.unwrap().quantity, 20);

    let err = service
        .decrement(brahma.id, QuantityUpdate::new(25))
        .await
        .unwrap_err();
    assert!(matches!(err, BeerError::NegativeStock { quantity: 20, .. }));
    assert_eq!(service.find_by_id(brahma.id).await.unwrap().quantity, 20);

    let beer = service
        .decrement(brahma.id, QuantityUpdate::new(20))
        .await
        .unwrap();
    assert_eq!(beer.quantity, 0);
}

#[tokio::test]
async fn test_increment_to_exactly_max_is_allowed() {
    let service = service();
    let beer = service.create(create_input("Skol", 50, 10)).await.unwrap();

    let beer = service
        .increment(beer.id, QuantityUpdate::new(40))
        .await
        .unwrap();
    assert_eq!(beer.quantity, 50);
}

#[tokio::test]
async fn test_lookup_by_name_and_delete() {
    let service = service();
    let created = service.create(create_input("Brahma", 50, 10)).await.unwrap();

    assert_eq!(service.find_by_name("Brahma").await.unwrap(), created);

    service.delete_by_id(created.id).await.unwrap();

    assert!(matches!(
        service.find_by_name("Brahma").await,
        Err(BeerError::NotFoundByName(_))
    ));
    assert!(matches!(
        service.delete_by_id(created.id).await,
        Err(BeerError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_all_is_ordered_by_name() {
    let service = service();
    for name in ["Skol", "Antarctica", "Brahma"] {
        service.create(create_input(name, 50, 10)).await.unwrap();
    }

    let names: Vec<String> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|beer| beer.name)
        .collect();
    assert_eq!(names, vec!["Antarctica", "Brahma", "Skol"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_increments_all_apply() {
    let service = service();

    for round in 0..5 {
        let beer = service
            .create(create_input(&format!("Brahma {round}"), 500, 0))
            .await
            .unwrap();

        let tasks = (0..200).map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.increment(beer.id, QuantityUpdate::new(1)).await })
        });

        for result in join_all(tasks).await {
            assert!(result.unwrap().is_ok());
        }

        assert_eq!(service.find_by_id(beer.id).await.unwrap().quantity, 200);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_increments_fill_up_to_max() {
    let service = service();
    let beer = service.create(create_input("Brahma", 10, 5)).await.unwrap();

    let tasks = (0..20).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.increment(beer.id, QuantityUpdate::new(1)).await })
    });

    let mut succeeded = 0;
    for result in join_all(tasks).await {
        match result.unwrap() {
            Ok(_) => succeeded += 1,
            Err(BeerError::StockExceeded { max: 10, .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(succeeded, 5);
    assert_eq!(service.find_by_id(beer.id).await.unwrap().quantity, 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_decrements_stop_at_zero() {
    let service = service();
    let beer = service.create(create_input("Brahma", 50, 30)).await.unwrap();

    let tasks = (0..40).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.decrement(beer.id, QuantityUpdate::new(1)).await })
    });

    let succeeded = join_all(tasks)
        .await
        .into_iter()
        .filter(|result| matches!(result, Ok(Ok(_))))
        .count();

    assert_eq!(succeeded, 30);
    assert_eq!(service.find_by_id(beer.id).await.unwrap().quantity, 0);
}

#[tokio::test]
async fn test_sequential_increments_all_apply() {
    let service = service();
    let beer = service.create(create_input("Brahma", 100, 0)).await.unwrap();

    for _ in 0..30 {
        service
            .increment(beer.id, QuantityUpdate::new(1))
            .await
            .unwrap();
    }

    assert_eq!(service.find_by_id(beer.id).await.unwrap().quantity, 30);
}

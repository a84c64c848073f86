use super::*;

/// Tests a captain passing the captain check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_captain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, group) = factory::helpers::create_group_with_captain(db).await?;
    let headers = headers_for(db, &user.id).await?;

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::GroupCaptain(&group.id)])
        .await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests a captain whose captain profile is not their first profile.
///
/// Verifies that every profile of the caller is considered.
///
/// Expected: Ok(User)
#[tokio::test]
async fn checks_every_profile_of_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::profile::create_profile(db, &user.id).await?;
    let captain_profile = factory::profile::create_profile(db, &user.id).await?;
    let group = factory::group::GroupFactory::new(db)
        .captains(vec!["someone-else".to_string(), captain_profile.id.clone()])
        .build()
        .await?;
    let headers = headers_for(db, &user.id).await?;

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::GroupCaptain(&group.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a member who is not a captain.
///
/// Expected: Err(AuthError::NotCaptain)
#[tokio::test]
async fn denies_non_captain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_captain(db).await?;

    let outsider = factory::user::create_user(db).await?;
    let outsider_profile = factory::profile::create_profile(db, &outsider.id).await?;
    let headers = headers_for(db, &outsider.id).await?;

    // Listed as member only
    factory::group::GroupFactory::new(db)
        .members(vec![outsider_profile.id.clone()])
        .build()
        .await?;

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::GroupCaptain(&group.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::NotCaptain(user_id, group_id))) => {
            assert_eq!(user_id, outsider.id);
            assert_eq!(group_id, group.id);
        }
        other => panic!("Expected NotCaptain error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a caller without any profile.
///
/// Expected: Err(AuthError::NotCaptain)
#[tokio::test]
async fn denies_caller_without_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_captain(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let headers = headers_for(db, &stranger.id).await?;

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::GroupCaptain(&group.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotCaptain(_, _)))
    ));

    Ok(())
}

/// Tests the captain check against a group that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let headers = headers_for(db, &user.id).await?;

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::GroupCaptain("missing")])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

//! Database integration tests.
//!
//! Each test opens its own in-memory `SQLite` store with the schema
//! initialized, so no external service is needed.

#![allow(clippy::unwrap_used)]

use photogram_common::{AppError, ErrorKind};
use photogram_db::test_utils::TestDatabase;

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let db = TestDatabase::new().await.unwrap();

    db.store().initialize().await.unwrap();
    db.store().initialize().await.unwrap();
    db.store().ping().await.unwrap();
}

#[tokio::test]
async fn test_close_refused_while_shared() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.into_store();
    let shared = store.clone();

    let result = store.close().await;
    assert!(matches!(result, Err(AppError::Internal(_))));

    shared.close().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_username() {
    let db = TestDatabase::new().await.unwrap();
    db.user("alice").await.unwrap();

    let result = db.user("alice").await;
    assert!(matches!(result, Err(AppError::DuplicateUsername(_))));
}

#[tokio::test]
async fn test_update_username() {
    let db = TestDatabase::new().await.unwrap();
    let users = db.store().users();
    let alice = db.user("alice").await.unwrap();
    db.user("bob").await.unwrap();

    users.update_username(alice.id, "alicia").await.unwrap();
    assert_eq!(users.get_by_id(alice.id).await.unwrap().username, "alicia");

    let taken = users.update_username(alice.id, "bob").await;
    assert!(matches!(taken, Err(AppError::DuplicateUsername(_))));

    let missing = users.update_username(999, "carol").await;
    assert!(matches!(missing, Err(AppError::UserNotFound(_))));
}

#[tokio::test]
async fn test_get_user_by_username_not_found() {
    let db = TestDatabase::new().await.unwrap();

    let result = db.store().users().get_by_username("nobody").await;
    assert!(matches!(result, Err(AppError::UserNotFound(_))));
}

#[tokio::test]
async fn test_ban_is_directional() {
    let db = TestDatabase::new().await.unwrap();
    let bans = db.store().bans();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();

    bans.insert(a.id, b.id).await.unwrap();

    assert!(bans.is_banning(a.id, b.id).await.unwrap());
    assert!(!bans.is_banning(b.id, a.id).await.unwrap());
    assert!(bans.is_banned_between(b.id, a.id).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_follow_keeps_single_edge() {
    let db = TestDatabase::new().await.unwrap();
    let follows = db.store().follows();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();

    follows.insert(a.id, b.id).await.unwrap();
    let again = follows.insert(a.id, b.id).await;

    assert_eq!(again.unwrap_err().kind(), ErrorKind::AlreadyExists);
    assert_eq!(db.store().counts().follower_count(b.id).await.unwrap(), 1);
    assert_eq!(db.store().counts().following_count(a.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_ban_mutates_nothing() {
    let db = TestDatabase::new().await.unwrap();
    let bans = db.store().bans();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();
    let c = db.user("carol").await.unwrap();
    bans.insert(a.id, c.id).await.unwrap();

    let result = bans.delete(a.id, b.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(bans.is_banning(a.id, c.id).await.unwrap());
}

#[tokio::test]
async fn test_edge_roundtrip_then_delete_twice() {
    let db = TestDatabase::new().await.unwrap();
    let follows = db.store().follows();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();

    follows.insert(a.id, b.id).await.unwrap();
    assert!(follows.is_following(a.id, b.id).await.unwrap());

    follows.delete(a.id, b.id).await.unwrap();
    assert!(!follows.is_following(a.id, b.id).await.unwrap());
    assert!(follows.delete(a.id, b.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_self_edges_do_not_crash_store() {
    let db = TestDatabase::new().await.unwrap();
    let a = db.user("alice").await.unwrap();

    db.store().follows().insert(a.id, a.id).await.unwrap();
    db.store().bans().insert(a.id, a.id).await.unwrap();

    db.store().follows().delete(a.id, a.id).await.unwrap();
    db.store().bans().delete(a.id, a.id).await.unwrap();
}

#[tokio::test]
async fn test_like_on_missing_photo_is_constraint_violation() {
    let db = TestDatabase::new().await.unwrap();
    let a = db.user("alice").await.unwrap();

    let result = db.store().likes().insert(a.id, 404).await;
    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_banned_viewer_does_not_see_photos() {
    let db = TestDatabase::new().await.unwrap();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();
    let c = db.user("carol").await.unwrap();

    db.store().bans().insert(a.id, b.id).await.unwrap();
    let photo = db.photo(a.id).await.unwrap();

    let photos = db.store().photos();
    assert!(photos.find_by_owner(a.id, b.id).await.unwrap().is_empty());

    let seen = photos.find_by_owner(a.id, c.id).await.unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, photo.id);
}

#[tokio::test]
async fn test_viewer_still_sees_users_they_banned() {
    let db = TestDatabase::new().await.unwrap();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();

    db.store().bans().insert(b.id, a.id).await.unwrap();
    db.photo(a.id).await.unwrap();

    let seen = db.store().photos().find_by_owner(a.id, b.id).await.unwrap();
    assert_eq!(seen.len(), 1);
}

#[tokio::test]
async fn test_comment_listing_hides_banning_authors_only() {
    let db = TestDatabase::new().await.unwrap();
    let owner = db.user("owner").await.unwrap();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();
    let c = db.user("carol").await.unwrap();
    let photo = db.photo(owner.id).await.unwrap();

    let comments = db.store().comments();
    comments.create(a.id, photo.id, "from alice").await.unwrap();
    let kept = comments.create(c.id, photo.id, "from carol").await.unwrap();
    db.store().bans().insert(a.id, b.id).await.unwrap();

    let visible = comments.find_visible_by_photo(photo.id, b.id).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, kept.id);

    let all = comments.find_visible_by_photo(photo.id, owner.id).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].body, "from alice");
}

#[tokio::test]
async fn test_delete_photo_cascades() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    let a = db.user("alice").await.unwrap();
    let b = db.user("bob").await.unwrap();
    let photo = db.photo(a.id).await.unwrap();
    let other = db.photo(a.id).await.unwrap();

    let first = store.comments().create(b.id, photo.id, "one").await.unwrap();
    let second = store.comments().create(a.id, photo.id, "two").await.unwrap();
    let survivor = store.comments().create(b.id, other.id, "three").await.unwrap();
    store.likes().insert(b.id, photo.id).await.unwrap();
    store.likes().insert(b.id, other.id).await.unwrap();

    store.photos().delete(photo.id).await.unwrap();

    let views = store.views();
    for id in [first.id, second.id] {
        let result = views.comment(id, a.id).await;
        assert!(matches!(result, Err(AppError::CommentNotFound(_))));
    }
    assert!(!store.likes().has_liked(b.id, photo.id).await.unwrap());
    assert!(matches!(
        store.photos().get_by_id(photo.id).await,
        Err(AppError::PhotoNotFound(_))
    ));

    assert!(store.comments().find_by_id(survivor.id).await.unwrap().is_some());
    assert!(store.likes().has_liked(b.id, other.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_photo_is_not_found() {
    let db = TestDatabase::new().await.unwrap();

    let result = db.store().photos().delete(404).await;
    assert!(matches!(result, Err(AppError::PhotoNotFound(_))));
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let db = TestDatabase::new().await.unwrap();
    let a = db.user("alice").await.unwrap();

    let first = db.photo(a.id).await.unwrap();
    db.store().photos().delete(first.id).await.unwrap();
    let second = db.photo(a.id).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_like_count_is_scoped_to_viewer() {
    let db = TestDatabase::new().await.unwrap();
    let counts = db.store().counts();
    let owner = db.user("owner").await.unwrap();
    let l1 = db.user("liker1").await.unwrap();
    let l2 = db.user("liker2").await.unwrap();
    let u = db.user("viewer").await.unwrap();
    let photo = db.photo(owner.id).await.unwrap();

    db.store().likes().insert(l1.id, photo.id).await.unwrap();
    db.store().likes().insert(l2.id, photo.id).await.unwrap();
    assert_eq!(counts.like_count(photo.id, u.id).await.unwrap(), 2);

    db.store().bans().insert(l1.id, u.id).await.unwrap();
    assert_eq!(counts.like_count(photo.id, u.id).await.unwrap(), 1);
    assert_eq!(counts.like_count(photo.id, owner.id).await.unwrap(), 2);

    let likers = db.store().views().like_list(photo.id, u.id).await.unwrap();
    assert_eq!(likers.users.len(), 1);
    assert_eq!(likers.users[0].id, l2.id);
}

#[tokio::test]
async fn test_comment_count_is_scoped_to_viewer() {
    let db = TestDatabase::new().await.unwrap();
    let owner = db.user("owner").await.unwrap();
    let a = db.user("alice").await.unwrap();
    let u = db.user("viewer").await.unwrap();
    let photo = db.photo(owner.id).await.unwrap();

    db.store().comments().create(a.id, photo.id, "hi").await.unwrap();
    db.store().comments().create(owner.id, photo.id, "hey").await.unwrap();
    db.store().bans().insert(a.id, u.id).await.unwrap();

    let view = db.store().views().photo(photo.id, u.id).await.unwrap();
    assert_eq!(view.comment_count, 1);

    let view = db.store().views().photo(photo.id, owner.id).await.unwrap();
    assert_eq!(view.comment_count, 2);
}

#[tokio::test]
async fn test_banned_comment_scenario() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    let alice = db.user("alice").await.unwrap();
    let bob = db.user("bob").await.unwrap();
    let carol = db.user("carol").await.unwrap();

    let p1 = store.photos().create(alice.id, "p1").await.unwrap();
    let comment = store.comments().create(bob.id, p1.id, "nice!").await.unwrap();
    store.bans().insert(bob.id, alice.id).await.unwrap();

    let for_alice = store.views().comment_list(p1.id, alice.id).await.unwrap();
    assert!(for_alice.comments.is_empty());

    let for_carol = store.views().comment_list(p1.id, carol.id).await.unwrap();
    assert_eq!(for_carol.comments.len(), 1);
    assert_eq!(for_carol.comments[0].id, comment.id);
    assert_eq!(for_carol.comments[0].author.username, "bob");
    assert_eq!(for_carol.comments[0].body, "nice!");
    assert_eq!(for_carol.comments[0].photo.id, p1.id);
}

#[tokio::test]
async fn test_comment_view_resolves_author_and_photo() {
    let db = TestDatabase::new().await.unwrap();
    let alice = db.user("alice").await.unwrap();
    let bob = db.user("bob").await.unwrap();
    let photo = db.photo(alice.id).await.unwrap();
    db.store().likes().insert(bob.id, photo.id).await.unwrap();
    let comment = db.store().comments().create(bob.id, photo.id, "hello").await.unwrap();

    let view = db.store().views().comment(comment.id, bob.id).await.unwrap();

    assert_eq!(view.author.id, bob.id);
    assert_eq!(view.photo.owner.id, alice.id);
    assert_eq!(view.photo.like_count, 1);
    assert_eq!(view.photo.comment_count, 1);
    assert!(view.photo.liked_by_viewer);
}

#[tokio::test]
async fn test_comment_list_on_missing_photo() {
    let db = TestDatabase::new().await.unwrap();
    let a = db.user("alice").await.unwrap();

    let result = db.store().views().comment_list(404, a.id).await;
    assert!(matches!(result, Err(AppError::PhotoNotFound(_))));
}

#[tokio::test]
async fn test_profile() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    let alice = db.user("alice").await.unwrap();
    let bob = db.user("bob").await.unwrap();
    let carol = db.user("carol").await.unwrap();

    let older = db.photo(alice.id).await.unwrap();
    let newer = db.photo(alice.id).await.unwrap();
    store.follows().insert(bob.id, alice.id).await.unwrap();
    store.follows().insert(carol.id, alice.id).await.unwrap();
    store.follows().insert(alice.id, carol.id).await.unwrap();
    store.bans().insert(bob.id, alice.id).await.unwrap();

    let profile = store.views().profile(alice.id, bob.id).await.unwrap();
    assert_eq!(profile.user.id, alice.id);
    assert_eq!(profile.photo_count, 2);
    assert_eq!(profile.followers_count, 2);
    assert_eq!(profile.following_count, 1);
    assert!(profile.follow_status);
    assert!(profile.ban_status);
    assert_eq!(
        profile.photos.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    store.bans().insert(alice.id, carol.id).await.unwrap();
    let hidden = store.views().profile(alice.id, carol.id).await.unwrap();
    assert!(hidden.photos.is_empty());
    assert_eq!(hidden.photo_count, 2);
    assert!(hidden.follow_status);
    assert!(!hidden.ban_status);
}

#[tokio::test]
async fn test_stream() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    let alice = db.user("alice").await.unwrap();
    let bob = db.user("bob").await.unwrap();
    let carol = db.user("carol").await.unwrap();
    let dave = db.user("dave").await.unwrap();

    let from_alice = db.photo(alice.id).await.unwrap();
    let from_bob = db.photo(bob.id).await.unwrap();
    db.photo(dave.id).await.unwrap();

    store.follows().insert(carol.id, alice.id).await.unwrap();
    store.follows().insert(carol.id, bob.id).await.unwrap();

    let stream = store.views().stream(carol.id).await.unwrap();
    assert_eq!(stream.user.id, carol.id);
    assert_eq!(
        stream.photos.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![from_bob.id, from_alice.id]
    );

    store.bans().insert(bob.id, carol.id).await.unwrap();
    let stream = store.views().stream(carol.id).await.unwrap();
    assert_eq!(stream.photos.len(), 1);
    assert_eq!(stream.photos[0].owner.id, alice.id);
}

#[tokio::test]
async fn test_follow_lists_hide_users_that_banned_viewer() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    let xavier = db.user("xavier").await.unwrap();
    let yara = db.user("yara").await.unwrap();
    let zoe = db.user("zoe").await.unwrap();
    let walt = db.user("walt").await.unwrap();

    store.follows().insert(xavier.id, zoe.id).await.unwrap();
    store.follows().insert(walt.id, zoe.id).await.unwrap();
    store.follows().insert(zoe.id, xavier.id).await.unwrap();
    store.bans().insert(xavier.id, yara.id).await.unwrap();

    let names = |list: &photogram_db::views::UserList| {
        list.users.iter().map(|u| u.username.clone()).collect::<Vec<_>>()
    };

    let for_yara = store.views().followers(zoe.id, yara.id).await.unwrap();
    assert_eq!(names(&for_yara), vec!["walt"]);

    let for_walt = store.views().followers(zoe.id, walt.id).await.unwrap();
    assert_eq!(names(&for_walt), vec!["walt", "xavier"]);

    let following = store.views().following(zoe.id, yara.id).await.unwrap();
    assert!(following.users.is_empty());

    let following = store.views().following(zoe.id, walt.id).await.unwrap();
    assert_eq!(names(&following), vec!["xavier"]);

    assert_eq!(store.counts().follower_count(zoe.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_search_users() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    db.user("alice").await.unwrap();
    let alicia = db.user("alicia").await.unwrap();
    let bob = db.user("bob").await.unwrap();

    let found = store.views().search_users("ali", bob.id).await.unwrap();
    assert_eq!(found.users.len(), 2);

    store.bans().insert(alicia.id, bob.id).await.unwrap();
    let found = store.views().search_users("ali", bob.id).await.unwrap();
    assert_eq!(found.users.len(), 1);
    assert_eq!(found.users[0].username, "alice");
}

#[tokio::test]
async fn test_search_users_matches_wildcards_literally() {
    let db = TestDatabase::new().await.unwrap();
    let store = db.store();
    db.user("abc").await.unwrap();
    db.user("a_c").await.unwrap();
    let viewer = db.user("viewer").await.unwrap();

    let found = store.views().search_users("a_c", viewer.id).await.unwrap();
    assert_eq!(found.users.len(), 1);
    assert_eq!(found.users[0].username, "a_c");

    let found = store.views().search_users("%", viewer.id).await.unwrap();
    assert!(found.users.is_empty());

    let found = store.views().search_users("_", viewer.id).await.unwrap();
    assert_eq!(found.users.len(), 1);
}

use std::ptr::{self, NonNull};

use crate::pointer::{
    FUNCTION_POINTER_HASH, LEAF_POINTER_HASH, NULL_POINTER_HASH, PointerClass, VOID_POINTER_HASH,
    hash_fn_option, hash_function, hash_invalid_pointer, hash_void_ptr, pointer_is_valid,
};

fn callee() -> i32 {
    7
}

fn other_callee() -> i32 {
    8
}

#[test]
fn sentinels_spell_ascii() {
    assert_eq!(NULL_POINTER_HASH, 0);
    assert_eq!(&VOID_POINTER_HASH.to_le_bytes(), b"VoidStar");
    assert_eq!(&FUNCTION_POINTER_HASH.to_le_bytes(), b"FuncStar");
    assert_eq!(VOID_POINTER_HASH, 0x7261_7453_6469_6F56);
    assert_eq!(FUNCTION_POINTER_HASH, 0x7261_7453_636E_7546);
}

#[test]
fn sentinels_are_distinct() {
    let all = [
        NULL_POINTER_HASH,
        VOID_POINTER_HASH,
        FUNCTION_POINTER_HASH,
        LEAF_POINTER_HASH,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ---------------------------------------------------------------------------
// Validity
// ---------------------------------------------------------------------------

#[test]
fn null_is_invalid() {
    assert!(!pointer_is_valid(ptr::null::<u8>()));
    assert!(!pointer_is_valid(ptr::null_mut::<u64>().cast_const()));
}

#[test]
fn non_null_is_valid() {
    let x = 5_i32;
    assert!(pointer_is_valid(&raw const x));
    // Never dereferenced, so a dangling pointer is still "valid".
    assert!(pointer_is_valid(NonNull::<u64>::dangling().as_ptr().cast_const()));
}

#[test]
fn unsized_pointers() {
    let slice: &[u8] = &[1, 2, 3];
    let text: &str = "abc";
    assert!(pointer_is_valid(ptr::from_ref(slice)));
    assert!(pointer_is_valid(ptr::from_ref(text)));
    assert_eq!(hash_void_ptr(ptr::from_ref(slice)), VOID_POINTER_HASH);
}

// ---------------------------------------------------------------------------
// Digests
// ---------------------------------------------------------------------------

#[test]
fn invalid_pointer_digest_ignores_argument() {
    let x = 1_u8;
    assert_eq!(hash_invalid_pointer(ptr::null::<u8>()), 0);
    assert_eq!(hash_invalid_pointer(&raw const x), 0);
}

#[test]
fn void_ptr_null_and_non_null() {
    assert_eq!(hash_void_ptr(ptr::null::<u32>()), NULL_POINTER_HASH);

    let a = 1_u32;
    let b = [0_u64; 4];
    assert_eq!(hash_void_ptr(&raw const a), VOID_POINTER_HASH);
    assert_eq!(hash_void_ptr(&raw const b), VOID_POINTER_HASH);
    assert_eq!(hash_void_ptr(&raw const b[3]), VOID_POINTER_HASH);
}

#[test]
fn function_digest_ignores_identity() {
    let f = callee as fn() -> i32;
    let g = other_callee as fn() -> i32;
    assert_eq!(hash_function(f as *const ()), FUNCTION_POINTER_HASH);
    assert_eq!(hash_function(g as *const ()), FUNCTION_POINTER_HASH);
    assert_eq!(hash_function(ptr::null::<()>()), FUNCTION_POINTER_HASH);
    assert_eq!(f(), 7);
    assert_eq!(g(), 8);
}

#[test]
fn fn_option() {
    let f: Option<fn() -> i32> = Some(callee);
    assert_eq!(hash_fn_option(f), FUNCTION_POINTER_HASH);
    assert_eq!(hash_fn_option(None::<fn() -> i32>), NULL_POINTER_HASH);
}

#[test]
fn classification() {
    let x = 0_u16;
    assert_eq!(PointerClass::of(ptr::null::<u16>()), PointerClass::Invalid);
    assert_eq!(PointerClass::of(&raw const x), PointerClass::VoidStar);
    assert_eq!(PointerClass::of_fn(Some(callee as fn() -> i32)), PointerClass::FuncStar);
    assert_eq!(PointerClass::Invalid.sentinel(), NULL_POINTER_HASH);
    assert_eq!(PointerClass::VoidStar.sentinel(), VOID_POINTER_HASH);
    assert_eq!(PointerClass::FuncStar.sentinel(), FUNCTION_POINTER_HASH);
}

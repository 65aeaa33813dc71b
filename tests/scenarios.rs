use vec_llist::{DoublyLinkedList, DynamicArray};

#[test]
fn test_array_script() {
    let mut vec = DynamicArray::with_capacity(10).unwrap();

    for i in 0..5 {
        vec.insert(0, i * 2).unwrap();
    }
    assert_eq!(vec.to_string(), "[ 8, 6, 4, 2, 0, _, _, _, _, _ ]");

    vec.insert(3, 42).unwrap();
    assert_eq!(vec, [8, 6, 4, 42, 2, 0]);
    assert_eq!(vec.peek(), 0);

    vec.push(84).unwrap();
    assert_eq!(vec.to_string(), "[ 8, 6, 4, 42, 2, 0, 84, _, _, _ ]");
    assert_eq!(vec.peek(), 84);

    let mut popped = Vec::new();
    for _ in 0..5 {
        popped.push(vec.pop().unwrap());
    }
    assert_eq!(popped, [84, 0, 2, 42, 4]);
    assert_eq!(vec.to_string(), "[ 8, 6, _, _, _ ]");
}

#[test]
fn test_list_script() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.to_string(), "[ ]");

    list.insert(0, 42);
    list.insert(0, 84);
    list.insert(2, 168);
    list.insert(1, 336);
    assert_eq!(list.to_string(), "[ 84 <-> 336 <-> 42 <-> 168 ]");

    assert_eq!(list.remove(2), 42);
    assert_eq!(list, [84, 336, 168]);

    for i in 0..10 {
        list.push(i * 2);
    }
    assert_eq!(list.len(), 13);

    assert_eq!(list.pop(), 18);
    assert_eq!(list.peek(), 16);

    list.set(9, 12345);
    assert_eq!(list, [84, 336, 168, 0, 2, 4, 6, 8, 10, 12345, 14, 16]);

    for index in (0..list.len()).rev() {
        assert!(list.contains(list.get(index)));
    }
    assert!(!list.contains(54321));
    assert_eq!(list.position(12345), Some(9));

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "[ ]");
}

#[test]
fn test_list_built_both_ways_compares_equal() {
    let positional: DoublyLinkedList = {
        let mut list = DoublyLinkedList::new();
        for (index, value) in [(0, 3), (0, 1), (1, 2), (3, 4), (0, 0)] {
            list.insert(index, value);
        }
        list
    };

    let mut pushed = DoublyLinkedList::new();
    for value in [2, 3, 4] {
        pushed.push(value);
    }
    for value in [1, 0] {
        pushed.push_front(value);
    }

    assert_eq!(positional, pushed);
    assert_eq!(positional, DoublyLinkedList::from([0, 1, 2, 3, 4]));
    assert_ne!(positional, DoublyLinkedList::from([0, 1, 2, 3]));
    assert_ne!(positional, DoublyLinkedList::from([0, 1, 2, 3, 5]));
}

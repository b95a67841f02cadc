/*!
# Instruction Set

A Brainfuck program is a sequence of bytes. Eight of them are instructions,
everything else is ignored, so programs may carry comments and whitespace.
The machine has a tape of 32,768 byte cells, all zero at start, and a data
pointer that begins at the first cell.

| Byte | Effect |
|------|--------|
| `+`  | Add one to the current cell. 255 becomes 0. |
| `-`  | Subtract one from the current cell. 0 becomes 255. |
| `>`  | Move the data pointer right. The last cell wraps to the first. |
| `<`  | Move the data pointer left. The first cell wraps to the last. |
| `[`  | If the current cell is zero, continue after the matching `]`. |
| `]`  | If the current cell is not zero, continue after the matching `[`. |
| `.`  | Write the current cell to standard output. |
| `,`  | Read one byte from standard input into the current cell. |

At end of input `,` leaves the cell unchanged.

Brackets must balance. A program with a `]` that closes nothing, or a `[`
that is never closed, is rejected before anything runs.

## Example
```text
++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.
```
prints `Hello World!`.

Programs longer than 32,768 bytes are cut off at that length.
A program that loops forever runs until it is killed.

*/
